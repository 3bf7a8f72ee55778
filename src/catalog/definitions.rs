//! # Builtin Rule Definitions
//!
//! The fixed household-energy catalog: conditions, recommendation and
//! rationale texts, savings arithmetic, and confidences. Declaration order
//! here has no semantic effect on firing; display priority is imposed
//! separately by the orderer.

use super::rule::{Bindings, Rule, Savings, SavingsRange};

/// The 16 builtin rules.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "LED_Lighting",
            condition: |v| {
                let count = v.count("incandescent_count");
                (count > 0).then(|| Bindings::new().with_count("count", count))
            },
            recommendation: "Switch all Incandescent bulbs to LED bulbs (CEB-labeled for efficiency).",
            explanation: "Incandescent bulbs use 75% more energy than LEDs; lighting accounts for ~15% of home use in Sri Lanka.",
            savings: Savings::Computed(|cx| {
                let count = cx.count("incandescent_count");
                SavingsRange::of((count * 30).max(100), (count * 50).max(150))
            }),
            confidence: 90,
        },
        Rule {
            name: "CFL_to_LED",
            condition: |v| {
                let count = v.count("cfl_count");
                (count > 0).then(|| Bindings::new().with_count("count", count))
            },
            recommendation: "Upgrade all CFL to LED bulbs for better efficiency.",
            explanation: "LEDs use 25-40% less energy than CFLs, last longer, and have no mercury; recommended by CEB for gradual upgrades.",
            savings: Savings::Computed(|cx| {
                let count = cx.count("cfl_count");
                SavingsRange::of((count * 20).max(50), (count * 40).max(100))
            }),
            confidence: 80,
        },
        Rule {
            name: "AC_Usage_Reduction",
            condition: |v| {
                let hours = v.hours("ac_hours");
                (v.flag("has_ac") && hours >= 5.0)
                    .then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Reduce AC usage to 3-4 hours/day; set thermostat to 24-26\u{b0}C.",
            explanation: "ACs are high consumers; setting higher temperatures saves 10-20% per degree and is sufficient for the tropical climate.",
            savings: Savings::Computed(|cx| {
                let hours = cx.hours("ac_hours");
                SavingsRange::of(
                    ((hours - 4.0) * 1.5 * 30.0 * 30.0) as i64,
                    ((hours - 3.0) * 1.5 * 30.0 * 30.0) as i64,
                )
            }),
            confidence: 85,
        },
        Rule {
            name: "AC_Efficiency",
            condition: |v| {
                let hours = v.hours("ac_hours");
                (v.flag("has_ac") && hours > 0.0)
                    .then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Clean AC filters monthly to maintain efficiency.",
            explanation: "Dirty AC filters can increase energy consumption by 5-15% as the unit works harder to push air. Regular cleaning is critical in the dusty SL environment.",
            savings: Savings::Fixed("Save ~LKR 200-350/month."),
            confidence: 75,
        },
        Rule {
            name: "Fan_Efficiency",
            condition: |v| {
                let count = v.count("fan_count");
                let hours = v.hours("fan_hours");
                (v.assumed_flag("has_fans") && count > 0 && hours >= 3.0).then(|| {
                    Bindings::new()
                        .with_count("count", count)
                        .with_hours("hours", hours)
                })
            },
            recommendation: "Upgrade to energy-efficient BLDC fans, especially if usage is high.",
            explanation: "BLDC fans use up to 50% less energy than conventional fans; ideal for the Sri Lankan tropical climate and supported by CEB incentives.",
            savings: Savings::Computed(|cx| {
                let count = cx.count("fan_count");
                SavingsRange::of(40 * count, 70 * count)
            }),
            confidence: 85,
        },
        Rule {
            name: "Fridge_Door_Habits",
            condition: |v| {
                let opens = v.count("fridge_door_opens");
                (opens >= 10).then(|| Bindings::new().with_count("opens", opens))
            },
            recommendation: "Batch access the fridge and clean the door seals for better efficiency.",
            explanation: "Frequent door openings cause 10-15% energy loss as the unit must re-cool warm air in humid SL kitchens.",
            savings: Savings::Fixed("Save ~LKR 100-200/month."),
            confidence: 75,
        },
        Rule {
            name: "Fridge_Defrost",
            condition: |v| {
                let age = v.count("fridge_age");
                (age >= 5).then(|| Bindings::new().with_count("age", age))
            },
            recommendation: "Defrost your freezer compartment regularly if ice is thicker than 1/4 inch.",
            explanation: "Excessive frost acts as an insulator, making the compressor run longer, which can increase the fridge's energy use by 10-20%.",
            savings: Savings::Fixed("Save ~LKR 100-250/month."),
            confidence: 80,
        },
        Rule {
            name: "Rice_Cooker_Timer",
            condition: |v| {
                let hours = v.hours("rice_cooker_keep_warm");
                (v.assumed_flag("has_rice_cooker") && hours >= 2.0)
                    .then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Avoid using the keep-warm mode for more than two hours; use a timer.",
            explanation: "Keep-warm mode > 2 hours wastes 40-50W/hour in SL rice cookers; using a timer significantly cuts this passive consumption.",
            savings: Savings::Computed(|cx| {
                let hours = cx.hours("rice_cooker_keep_warm");
                SavingsRange::of(
                    (((hours - 2.0) * 50.0 * 30.0 * 30.0 / 1000.0) as i64).max(45),
                    (((hours - 2.0) * 80.0 * 30.0 * 30.0 / 1000.0) as i64).max(100),
                )
            }),
            confidence: 85,
        },
        Rule {
            name: "Peak_Hour_Shift",
            condition: |v| {
                let hours = v.hours("total_appliance_hours");
                (v.flag("peak_hour_use") && hours >= 3.0)
                    .then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Shift high-power appliance use (e.g., washing machine, oven) to off-peak hours (6:30am-6:30pm); avoid 6:30pm-10:30pm.",
            explanation: "CEB peak tariffs apply during this window, adding 20-30% cost to your usage.",
            savings: Savings::Fixed("Save ~LKR 250-400/month."),
            confidence: 90,
        },
        Rule {
            name: "Natural_Ventilation",
            // Reads has_fans with the plain default here: the pairing with
            // windows_closed only makes sense for explicitly reported fans.
            condition: |v| {
                (v.flag("windows_closed") && v.flag("has_fans")).then(Bindings::new)
            },
            recommendation: "Open windows for natural breeze before turning on fans or AC.",
            explanation: "Utilizing natural airflow and cross-ventilation can reduce the need for fans/AC by 15% in SL's climate.",
            savings: Savings::Fixed("Save ~LKR 150-250/month."),
            confidence: 80,
        },
        Rule {
            name: "Old_Fridge_Replace",
            condition: |v| {
                let age = v.count("fridge_age");
                (age >= 10).then(|| Bindings::new().with_count("age", age))
            },
            recommendation: "Replace with a new PUCSL star-rated model.",
            explanation: "Old fridges use 20-30% more energy than modern efficient models, leading to significant ongoing expense.",
            savings: Savings::Fixed("Save ~LKR 300-500/month."),
            confidence: 85,
        },
        Rule {
            name: "Lights_Timers",
            condition: |v| {
                let hours = v.hours("lights_left_on");
                (hours >= 1.0).then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Use timers or motion sensors to ensure lights are not left on when rooms are empty.",
            explanation: "Unused lights waste energy; smart timers are an effective way to control usage.",
            savings: Savings::Computed(|cx| {
                let hours = cx.hours("lights_left_on");
                SavingsRange::of(
                    (((hours * 10.0 * 30.0 * 30.0) / 1000.0) as i64).max(30),
                    (((hours * 20.0 * 30.0 * 30.0) / 1000.0) as i64).max(100),
                )
            }),
            confidence: 75,
        },
        Rule {
            name: "Iron_Batching",
            condition: |v| {
                let hours = v.hours("iron_hours");
                (hours >= 0.5).then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Iron multiple items in one session (batching).",
            explanation: "Reduces the number of heat-up cycles, which consume the most energy for this high-power appliance.",
            savings: Savings::Computed(|cx| {
                let hours = cx.hours("iron_hours");
                SavingsRange::of(
                    ((hours - 0.5) * 100.0) as i64,
                    ((hours - 0.5) * 200.0) as i64,
                )
            }),
            confidence: 80,
        },
        Rule {
            name: "Water_Heater_Timer",
            condition: |v| {
                let hours = v.hours("heater_hours");
                (v.assumed_flag("has_water_heater") && hours >= 2.0)
                    .then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Limit water heater use to short, necessary bursts using a timer.",
            explanation: "Heaters draw high power (2-3kW); minimizing the active heating time is the most effective saving measure.",
            savings: Savings::Computed(|cx| {
                let hours = cx.hours("heater_hours");
                SavingsRange::of(
                    ((hours - 1.0) * 2.0 * 30.0 * 30.0) as i64,
                    ((hours - 1.0) * 2.5 * 30.0 * 30.0) as i64,
                )
            }),
            confidence: 85,
        },
        Rule {
            name: "Water_Heater_Temp",
            condition: |v| {
                let hours = v.hours("heater_hours");
                (v.assumed_flag("has_water_heater") && hours > 0.0)
                    .then(|| Bindings::new().with_hours("hours", hours))
            },
            recommendation: "Set the water heater thermostat to a maximum of 49\u{b0}C (120\u{b0}F).",
            explanation: "Setting the temperature too high increases standing heat loss and uses more energy than necessary. Every 10\u{b0}C reduction can save 3-5% energy.",
            savings: Savings::Fixed("Save ~LKR 150-300/month."),
            confidence: 80,
        },
        Rule {
            name: "Standby_Unplug",
            condition: |v| (!v.assumed_flag("unplug_habit")).then(Bindings::new),
            recommendation: "Unplug TVs, chargers, and non-essential appliances when not in use.",
            explanation: "Standby power (phantom load) can account for 5-10% of your total electricity bill, according to CEB tips.",
            savings: Savings::Fixed("Save ~LKR 100-200/month."),
            confidence: 90,
        },
    ]
}
