use crate::ruleset::{ConditionRole, RuleSetId};

pub fn run() {
    println!("📋 Available rule sets\n");

    for id in RuleSetId::all() {
        let descriptor = id.descriptor();
        let default_marker = if id == RuleSetId::default() {
            " (default)"
        } else {
            ""
        };
        println!("🔹 {} — {}{}", id, descriptor.name, default_marker);
        println!("   {}", descriptor.description);

        for spec in descriptor.conditions {
            let marker = match spec.role {
                ConditionRole::Required => "required",
                ConditionRole::Confirmation => "confirm ",
                ConditionRole::HardReject => "reject  ",
            };
            println!("   [{}] {}: {}", marker, spec.code, spec.description);
        }
        println!();
    }
}
