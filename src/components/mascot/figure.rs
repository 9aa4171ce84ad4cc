//! SVG figure driven by a [`Pose`].
//!
//! Both figures share one drawing in a 40×90 box. The right-hand figure is
//! the left one mirrored, so "inner" limbs always face the sign.

use leptos::prelude::*;
use refine_core::mascot::{Arms, Pose, Stride};

stylance::import_crate_style!(css, "src/components/mascot/mascot.module.css");

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

const SHOULDER_Y: f64 = 24.0;
const HIP_Y: f64 = 50.0;
const FOOT_Y: f64 = 80.0;

/// Hand positions (outer, inner) in the left figure's coordinates.
fn hands(arms: Arms) -> [(f64, f64); 2] {
    match arms {
        Arms::Carrying => [(5.0, 42.0), (36.0, 40.0)],
        Arms::Reaching => [(8.0, 54.0), (32.0, 54.0)],
        Arms::Raised { left_high: true } => [(3.0, 4.0), (39.0, 10.0)],
        Arms::Raised { left_high: false } => [(1.0, 10.0), (37.0, 4.0)],
    }
}

/// Foot x positions (outer, inner).
fn feet(stride: Stride) -> [f64; 2] {
    match stride {
        Stride::Planted => [13.0, 27.0],
        Stride::LeftForward => [7.0, 25.0],
        Stride::RightForward => [15.0, 33.0],
    }
}

#[component]
pub fn Figure(side: Side, pose: Memo<Pose>) -> impl IntoView {
    let mirror = side == Side::Right;
    let flip = if mirror { "translate(40 0) scale(-1 1)" } else { "" };
    let (figure_class, limb_class) = match side {
        Side::Left => (css::figureLeft, css::limbLeft),
        Side::Right => (css::figureRight, css::limbRight),
    };

    let body_style = move || {
        let p = pose.get();
        let tilt = if mirror { -p.body_tilt } else { p.body_tilt };
        format!(
            "transform: translateY({:.1}px) rotate({:.1}deg)",
            -p.bob + p.crouch * 10.0,
            tilt
        )
    };
    let hand = move |i: usize| move || hands(pose.get().arms)[i];
    let foot = move |i: usize| move || feet(pose.get().stride)[i];
    // Knees bend by lowering the hips towards the feet
    let hip_y = move || HIP_Y + pose.get().crouch * 8.0;

    view! {
        <svg class=figure_class viewBox="0 0 40 90" style=body_style>
            <g transform=flip>
                <circle class=css::head cx="20" cy="12" r="7" />
                <path class=css::torso d="M10 22C10 19 14 17 20 17C26 17 30 19 30 22L31 50H9L10 22Z" />
                {(0..2).map(|i| {
                    let shoulder_x = if i == 0 { 10.0 } else { 30.0 };
                    let end = hand(i);
                    view! {
                        <line
                            class=limb_class
                            x1=shoulder_x.to_string()
                            y1=SHOULDER_Y.to_string()
                            x2=move || format!("{:.1}", end().0)
                            y2=move || format!("{:.1}", end().1)
                        />
                    }
                }).collect_view()}
                {(0..2).map(|i| {
                    let hip_x = if i == 0 { 15.0 } else { 25.0 };
                    let x = foot(i);
                    view! {
                        <line
                            class=css::leg
                            x1=hip_x.to_string()
                            y1=move || format!("{:.1}", hip_y())
                            x2=move || format!("{:.1}", x())
                            y2=FOOT_Y.to_string()
                        />
                    }
                }).collect_view()}
            </g>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_arms_alternate() {
        let a = hands(Arms::Raised { left_high: true });
        let b = hands(Arms::Raised { left_high: false });
        assert!(a[0].1 < b[0].1);
        assert!(a[1].1 > b[1].1);
    }

    #[test]
    fn test_stride_moves_both_feet() {
        let planted = feet(Stride::Planted);
        assert!(feet(Stride::LeftForward)[0] < planted[0]);
        assert!(feet(Stride::RightForward)[1] > planted[1]);
    }
}
