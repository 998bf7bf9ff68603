// Fri Oct 16 2026 - Alex

use assert_cmd::cargo::cargo_bin_cmd;
use modcheck::{CheckMode, Config, ExtraIncludePolicy, RunContext, Runner, ViolationKind};
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, text).expect("write fixture");
}

/// A small tree where every check passes.
fn clean_tree() -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    let src = tmp.path().join("src");

    write(
        &src,
        "uwvm2/parser/wasm/base/def.cppm",
        "\
module;

export module uwvm2.parser.wasm.base:def;

import fast_io;
import uwvm2.utils.container;
",
    );
    write(
        &src,
        "uwvm2/parser/wasm/base/def.h",
        "\
/*************************************************************
 * header
 *************************************************************/

#pragma once

#ifndef UWVM_MODULE
// std
# include <cstddef>
// macro
# include <uwvm2/utils/macro/push_macros.h>
// import
# include <fast_io.h>
# include <uwvm2/utils/container/impl.h>
#endif

#ifndef UWVM_MODULE_EXPORT
# define UWVM_MODULE_EXPORT
#endif
",
    );
    write(
        &src,
        "uwvm2/parser/wasm/base/impl.cppm",
        "\
module;

export module uwvm2.parser.wasm.base;

export import :def;
export import uwvm2.parser.wasm.base.sub;
",
    );
    write(
        &src,
        "uwvm2/parser/wasm/base/impl.h",
        "\
#pragma once

#ifndef UWVM_MODULE
# include <uwvm2/utils/debug/impl.h>
# include \"def.h\"
# include \"sub/impl.h\"
#endif
",
    );
    write(
        &src,
        "uwvm2/uwvm/run/run.module.cpp",
        "\
module;

module uwvm2.uwvm.run;

import fast_io;
import uwvm2.parser.wasm.base;
import uwvm2.uwvm.io;
",
    );
    write(
        &src,
        "uwvm2/uwvm/run/run.default.cpp",
        "\
#include <memory>

#ifndef UWVM_MODULE
# include <fast_io.h>
# include <uwvm2/parser/wasm/base/impl.h>
# include <uwvm2/uwvm/io/impl.h>
#endif
",
    );
    write(&src, ".hidden/bad.h", "#pragma once\n#include <x.h>\n");

    tmp
}

fn run(root: &Path, mode: CheckMode, policy: ExtraIncludePolicy) -> modcheck::Report {
    let config = Config::new()
        .with_src_root(root.to_path_buf())
        .with_extra_includes(policy);
    let runner = Runner::new(RunContext::new(config).expect("context")).expect("runner");
    runner.run(mode).expect("run")
}

#[test]
fn clean_tree_passes_all_checks() {
    let tmp = clean_tree();
    let report = run(&tmp.path().join("src"), CheckMode::All, ExtraIncludePolicy::Drop);
    assert!(report.violations.is_empty(), "{}", report.format_text());
    assert_eq!(report.stats.pairs_checked, 3);
    assert_eq!(report.stats.headers_checked, 2);
}

#[test]
fn advisory_policy_reports_dropped_aggregate_include() {
    let tmp = clean_tree();
    let report = run(&tmp.path().join("src"), CheckMode::Module, ExtraIncludePolicy::Advise);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::ExtraInclude);
    assert!(report.violations[0].message.contains("uwvm2.utils.debug"));
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn violations_are_all_collected() {
    let tmp = clean_tree();
    let src = tmp.path().join("src");
    write(&src, "uwvm2/utils/a.h", "#pragma once\n\n#include <fast_io.h>\n");
    write(&src, "uwvm2/utils/b.h", "#pragma once\n/* note */ #define B\n");
    write(
        &src,
        "uwvm2/uwvm/run/run.default.cpp",
        "#ifndef UWVM_MODULE\n# include <uwvm2/uwvm/io/impl.h>\n# include <uwvm2/parser/wasm/base/impl.h>\n#endif\n",
    );

    let report = run(&src, CheckMode::All, ExtraIncludePolicy::Drop);
    let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::Order,
            ViolationKind::Mismatch,
            ViolationKind::GuardOrder,
            ViolationKind::GuardOrder,
        ]
    );
    assert_eq!(report.violations[2].line, Some(3));
    assert!(report.violations[3].message.contains("`#define`"));
}

#[test]
fn cli_clean_tree_exits_zero() {
    let tmp = clean_tree();
    cargo_bin_cmd!("modcheck")
        .current_dir(tmp.path())
        .args(["--no-color", "all"])
        .assert()
        .code(0)
        .stdout(contains("No violations found."));
}

#[test]
fn cli_violation_exits_one() {
    let tmp = clean_tree();
    write(&tmp.path().join("src"), "x/bad.h", "#pragma once\n#include <fast_io.h>\n");

    cargo_bin_cmd!("modcheck")
        .args(["--no-color", "guard"])
        .arg(tmp.path().join("src"))
        .assert()
        .code(1)
        .stdout(contains("Found issues:"))
        .stdout(contains("bad.h:2: `#include` appears immediately after `#pragma once`"));
}

#[test]
fn cli_json_output() {
    let tmp = clean_tree();
    write(&tmp.path().join("src"), "x/bad.h", "#pragma once\n#include <fast_io.h>\n");

    let out = cargo_bin_cmd!("modcheck")
        .args(["--json", "all"])
        .arg(tmp.path().join("src"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(value["violations"][0]["kind"], "guard-order");
    assert_eq!(value["violations"][0]["line"], 2);
}

#[test]
fn cli_missing_root_exits_two() {
    let tmp = TempDir::new().expect("create temp dir");
    cargo_bin_cmd!("modcheck")
        .args(["module"])
        .arg(tmp.path().join("nope"))
        .assert()
        .code(2)
        .stderr(contains("Source root does not exist"));
}
