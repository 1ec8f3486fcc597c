// Accessibility widget state managers
// Managers handle stateful UI concerns: the panel's visibility, layout and position.

pub mod panel_manager;
