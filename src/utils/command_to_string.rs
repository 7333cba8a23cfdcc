use std::process::Command;

/// Render a command the way it would be typed in a shell, for logs and error messages
pub fn command_to_string(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_program_and_args() {
        let mut cmd = Command::new("./uno.sh");
        cmd.arg("./test_data/A_B_200_100_features.txt");
        assert_eq!(
            command_to_string(&cmd),
            "./uno.sh ./test_data/A_B_200_100_features.txt"
        );
        assert_eq!(command_to_string(&Command::new("python3")), "python3");
    }
}
