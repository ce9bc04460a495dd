use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tacc_lib::backend::register_allocation::EdgeMembership;
use tacc_lib::compiler::{compile, compile_source, Settings};
use tacc_lib::driver::{render, Stage};
use tacc_lib::error::{AllocationError, CompileError};

fn samples(stage: &str) -> PathBuf {
    let home_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(format!("{}/tests/samples/{}", home_dir, stage))
}

fn is_source_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|s| s.to_str()), Some("tac"))
}

fn source_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        panic!("Expected directory {:?}", dir)
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_source_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[test]
fn valid_samples() -> io::Result<()> {
    let mut failures = Vec::new();
    let files = source_files(&samples("valid"))?;
    assert!(!files.is_empty());

    for path in files {
        let expected = fs::read_to_string(path.with_extension("expected"))?;
        match compile(path.to_str().unwrap(), &Settings::default()) {
            Ok(compilation) => {
                let listing = compilation.listing.join("\n");
                if listing.trim() != expected.trim() {
                    failures.push(format!(
                        "{:?}: expected\n{}\nbut found\n{}",
                        path, expected, listing
                    ));
                }
            }
            Err(err) => failures.push(format!("{:?}: failed with {}", path, err)),
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
    Ok(())
}

#[test]
fn invalid_samples() -> io::Result<()> {
    let mut failures = Vec::new();
    let files = source_files(&samples("invalid"))?;
    assert!(!files.is_empty());

    for path in files {
        if compile(path.to_str().unwrap(), &Settings::default()).is_ok() {
            failures.push(format!("{:?}: compiled, but should have failed", path));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let result = compile("/nonexistent/block.tac", &Settings::default());
    assert!(matches!(result, Err(CompileError::Io(..))));
}

#[test]
fn zero_registers_are_rejected() {
    let settings = Settings {
        registers: 0,
        ..Settings::default()
    };
    let result = compile_source("zero.tac", "a = 1\n", &settings);
    assert!(matches!(
        result,
        Err(CompileError::Allocation(AllocationError::NoRegisters))
    ));
}

#[test]
fn too_few_registers_fail_without_grow() {
    let settings = Settings {
        registers: 2,
        ..Settings::default()
    };
    let result = compile_source("few.tac", "a = a + 1\nt1 = a * 2\nb = t1 / 3\nlive: a, b\n", &settings);
    assert!(matches!(
        result,
        Err(CompileError::Allocation(AllocationError::Infeasible {
            registers: 2,
            variables: 3
        }))
    ));
}

#[test]
fn grow_uses_the_smallest_sufficient_count() {
    let settings = Settings {
        registers: 1,
        grow: true,
        ..Settings::default()
    };
    let compilation =
        compile_source("grow.tac", "a = a + 1\nt1 = a * 2\nb = t1 / 3\nlive: a, b\n", &settings)
            .unwrap();
    assert_eq!(compilation.registers, 3);
    assert_eq!(compilation.listing.len(), 6);
}

#[test]
fn live_only_policy_needs_fewer_registers() {
    let settings = Settings {
        registers: 2,
        grow: false,
        membership: EdgeMembership::LiveOnly,
    };
    let compilation =
        compile_source("live.tac", "a = a + 1\nt1 = a * 2\nb = t1 / 3\nlive: a, b\n", &settings)
            .unwrap();
    assert_eq!(compilation.registers, 2);
    assert_eq!(
        compilation.listing,
        vec!["MOV R0,R0", "ADD #1,R0", "MOV R0,R1", "MUL #2,R1", "MOV R1,R1", "DIV #3,R1"]
    );
}

#[test]
fn render_each_stage() {
    let compilation = compile_source(
        "render.tac",
        "x = 1\nx = x + 1\ny = 2\nlive: y\n",
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(
        render(&compilation, Stage::Liveness),
        "0: x = 1: [x: defined]\n1: x = x + 1: [x: defined]\n2: y = 2: [y: defined]\n3: End of code block: [y: live]"
    );
    assert_eq!(
        render(&compilation, Stage::Graph),
        "Interference Graph:\nNodes: [x, y]\nEdges: []\nColors:\n\tx => R0\n\ty => R0"
    );
    assert_eq!(
        render(&compilation, Stage::Listing),
        "MOV #1,R0\nMOV R0,R0\nADD #1,R0\nMOV #2,R0"
    );
}
