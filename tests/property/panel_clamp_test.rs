//! Property-based tests for panel placement.
//!
//! However the panel is dragged or the viewport resized, its top-left corner
//! stays within `[margin, viewport - panel - margin]` on both axes.

use accessibility_widget::managers::panel_manager::{PanelGeometry, PanelManager, PanelManagerTrait};
use accessibility_widget::types::panel::{Layout, Position, Viewport};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum PanelOp {
    Drag(f64, f64),
    Resize(f64, f64),
    Toggle,
}

fn arb_ops() -> impl Strategy<Value = Vec<PanelOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (-2000.0..4000.0f64, -2000.0..4000.0f64).prop_map(|(x, y)| PanelOp::Drag(x, y)),
            2 => (100.0..3000.0f64, 100.0..2000.0f64).prop_map(|(w, h)| PanelOp::Resize(w, h)),
            1 => Just(PanelOp::Toggle),
        ],
        1..40,
    )
}

fn geometry() -> PanelGeometry {
    PanelGeometry {
        width: 280.0,
        height: 360.0,
        margin: 10.0,
        mobile_breakpoint: 768.0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn panel_stays_inside_viewport(ops in arb_ops()) {
        let g = geometry();
        let mut panel = PanelManager::new(g, Viewport { width: 1280.0, height: 800.0 });
        panel.open();

        for op in &ops {
            match op {
                PanelOp::Drag(x, y) => {
                    let start = panel.position();
                    if panel.begin_drag(Position { x: start.x + 5.0, y: start.y + 5.0 }) {
                        panel.drag_to(Position { x: *x, y: *y });
                        panel.end_drag();
                    }
                }
                PanelOp::Resize(w, h) => panel.set_viewport(Viewport { width: *w, height: *h }),
                PanelOp::Toggle => {
                    panel.toggle();
                }
            }

            let viewport = panel.viewport();
            let pos = panel.position();
            let max_x = (viewport.width - g.width - g.margin).max(g.margin);
            let max_y = (viewport.height - g.height - g.margin).max(g.margin);
            prop_assert!(pos.x >= g.margin && pos.x <= max_x, "x={} after {:?}", pos.x, op);
            prop_assert!(pos.y >= g.margin && pos.y <= max_y, "y={} after {:?}", pos.y, op);

            if panel.layout() == Layout::Mobile {
                prop_assert_eq!(pos, Position { x: max_x, y: max_y });
            }
        }
    }
}
