#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const INSTANCES_DIR: &str = "../data/ails/Instances";
pub const SOLUTIONS_DIR: &str = "../data/ails/Solutions";
pub const INSTANCE_PATH: &str = "../data/ails/Instances/X-n8-k3-HD.vrp";
pub const SOLUTION_PATH: &str = "../data/ails/Solutions/run-1/X-n8-k3-HD.sol";
pub const PESSOA_INSTANCE_PATH: &str = "../data/pessoa/X-n8-k3-HD.vrp";

pub const EXPECTED_SOLUTION: &str = "Route #1: 2\nRoute #2: \nRoute #3: 3 5\nRoute #4: 8\nRoute #5: 7 4 6\nCost: 512.35";

pub const TWO_TYPES_INSTANCE: &str = "NAME : two types\nCAPACITIES\n283 400\nVEHICLES_AVAILABLE\n2 1\nEOF\n";

/// Writes files with given content creating parent directories.
pub fn create_files(root: &Path, files: &[(&str, &str)]) {
    files.iter().for_each(|(path, content)| {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    });
}
