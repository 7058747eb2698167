use crate::ai::spec::prompt::{build_user_prompt, SYSTEM_PROMPT};

/// Print the instruction template and wrapped user message that `generate`
/// would send, without calling the API.
pub fn run(prompt: &str) {
    println!("# System\n");
    println!("{SYSTEM_PROMPT}");
    println!("# User\n");
    println!("{}", build_user_prompt(prompt));
}
