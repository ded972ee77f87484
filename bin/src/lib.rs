pub mod cli;
pub mod commands;

#[cfg(test)]
mod tests {
    use crate::{cli::OpSpec, commands};
    use std::fs;

    #[test]
    fn apply_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.gcode");
        let output = dir.path().join("output.gcode");
        fs::write(&input, "; start\nG1 X0 Y0 E1.0\nG1 X10 Y10 E2.0\nM84\n").unwrap();

        let ops: Vec<OpSpec> = vec!["0,0,5,5:2.0".parse().unwrap()];
        commands::apply::run(&input, &output, &ops).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "; start\nG1 X0 Y0 E2.00000\nG1 X10 Y10 E2.00000\nM84\n"
        );
    }

    #[test]
    fn ops_compound_in_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.gcode");
        let output = dir.path().join("output.gcode");
        fs::write(&input, "G1 X1 Y1 E1.0\n").unwrap();

        let ops: Vec<OpSpec> = vec![
            "0,0,5,5:1.5".parse().unwrap(),
            "0,0,2,2:2.0".parse().unwrap(),
        ];
        commands::apply::run(&input, &output, &ops).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "G1 X1 Y1 E3.00000\n");
    }

    #[test]
    fn fatal_extraction_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.gcode");
        let output = dir.path().join("output.gcode");
        fs::write(&input, "G1 Xoops Y0 E1.0\n").unwrap();

        let ops: Vec<OpSpec> = vec!["0,0,5,5:2.0".parse().unwrap()];
        assert!(commands::apply::run(&input, &output, &ops).is_err());
        assert!(!output.exists());
    }
}
