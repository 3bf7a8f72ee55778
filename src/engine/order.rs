//! # Display Ordering
//!
//! Deterministic presentation order for fired rules, independent of catalog
//! declaration order. Purely cosmetic: nothing here affects which rules
//! fire or what values they resolve.

use super::FiredRule;

/// Display priority by domain category: cooling, heating, cooking,
/// refrigeration, lighting, then habits.
pub const DISPLAY_PRIORITY: &[&str] = &[
    "AC_Usage_Reduction",
    "AC_Efficiency",
    "Fan_Efficiency",
    "Natural_Ventilation",
    "Water_Heater_Timer",
    "Water_Heater_Temp",
    "Rice_Cooker_Timer",
    "Fridge_Defrost",
    "Fridge_Door_Habits",
    "Old_Fridge_Replace",
    "LED_Lighting",
    "CFL_to_LED",
    "Lights_Timers",
    "Iron_Batching",
    "Peak_Hour_Shift",
    "Standby_Unplug",
];

/// Index of a rule name in the priority list; names not listed sort after
/// every listed one.
fn priority_index(name: &str) -> usize {
    DISPLAY_PRIORITY
        .iter()
        .position(|n| *n == name)
        .unwrap_or(DISPLAY_PRIORITY.len())
}

/// Stable sort by priority index. Unlisted names keep their original
/// relative order at the end.
pub fn sort_for_display(fired: &mut [FiredRule]) {
    fired.sort_by_key(|f| priority_index(&f.name));
}
