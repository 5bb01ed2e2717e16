//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::workspace::TestWorkspace;

/// Assert the workspace holds `name` with exactly `expected` as content
pub fn assert_file_eq(workspace: &TestWorkspace, name: &str, expected: &str) {
    assert!(
        workspace.exists(name),
        "Expected {name} to be written. Files: {:?}",
        workspace.files()
    );
    assert_eq!(workspace.read(name), expected, "Unexpected content in {name}");
}

/// Assert the file is a P3 image with the given header
pub fn assert_ppm_header(text: &str, width: usize, height: usize, max_value: u16) {
    let expected = format!("P3\n{width} {height}\n{max_value}\n");
    assert!(
        text.starts_with(&expected),
        "Expected header {expected:?}, got {:?}",
        text.lines().take(3).collect::<Vec<_>>()
    );
}

/// Assert every sample line is a triple of 0/1 values
pub fn assert_binary_samples(text: &str) {
    for (i, line) in text.lines().skip(3).enumerate() {
        let values: Vec<&str> = line.split(' ').collect();
        assert_eq!(values.len(), 3, "Sample {i} is not a triple: {line:?}");
        for value in values {
            assert!(
                value == "0" || value == "1",
                "Sample {i} has non-binary value {value:?}"
            );
        }
    }
}
