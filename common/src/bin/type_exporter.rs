use common::{
    ActionEntity, Envelope, HelloMessage, LoginResult, Permission, Role, StepCode, UserInfo,
    UserRecord,
};
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() {
    // Collect all exported types, dependencies before dependents
    let declarations = [
        ActionEntity::export_to_string().unwrap(),
        Permission::export_to_string().unwrap(),
        Role::export_to_string().unwrap(),
        UserRecord::export_to_string().unwrap(),
        LoginResult::export_to_string().unwrap(),
        UserInfo::export_to_string().unwrap(),
        Envelope::<LoginResult>::export_to_string().unwrap(),
        StepCode::export_to_string().unwrap(),
        HelloMessage::export_to_string().unwrap(),
    ];

    let all_types = declarations.concat();
    let cleaned_types = clean_declarations(&all_types);

    // Define the output path relative to the workspace root
    let out_path = Path::new("frontend/src/api/types.ts");

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    fs::write(out_path, cleaned_types).unwrap();
    println!("✅ TypeScript definitions generated at: {}", out_path.display());
}

/// Every declaration lands in one file, so per-type imports are dropped and
/// only the first generated-file banner is kept.
fn clean_declarations(content: &str) -> String {
    let mut result = Vec::new();
    let mut found_first_comment = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("import ") {
            continue;
        }
        if trimmed.starts_with("//") {
            if !found_first_comment {
                result.push(line);
                found_first_comment = true;
            }
        } else {
            result.push(line);
        }
    }

    result.join("\n") + "\n"
}
