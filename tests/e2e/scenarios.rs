use std::ffi::OsStr;

use super::harness::{TestContext, ensure_dir, parse_json, write_file};

pub struct Scenario {
    pub name: &'static str,
    pub run: fn(&TestContext) -> Result<(), String>,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "help_output",
            run: scenario_help,
        },
        Scenario {
            name: "no_args_error",
            run: scenario_no_args,
        },
        Scenario {
            name: "missing_pubspec_file",
            run: scenario_missing_pubspec_file,
        },
        Scenario {
            name: "invalid_yaml",
            run: scenario_invalid_yaml,
        },
        Scenario {
            name: "no_dependencies",
            run: scenario_no_dependencies,
        },
        Scenario {
            name: "scalar_document",
            run: scenario_scalar_document,
        },
        Scenario {
            name: "found_single",
            run: scenario_found_single,
        },
        Scenario {
            name: "not_downloaded_single",
            run: scenario_not_downloaded_single,
        },
        Scenario {
            name: "mixed_buckets",
            run: scenario_mixed_buckets,
        },
        Scenario {
            name: "pub_cache_env",
            run: scenario_pub_cache_env,
        },
        Scenario {
            name: "pub_cache_flag",
            run: scenario_pub_cache_flag,
        },
        Scenario {
            name: "json_output",
            run: scenario_json_output,
        },
        Scenario {
            name: "verbose_logs_to_stderr",
            run: scenario_verbose,
        },
    ]
}

fn scenario_help(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("help")?;
    let output = ctx.run_spmcheck(&env, &["--help"])?;
    output.assert_success()?;
    output.assert_stdout_contains("PUBSPEC")?;
    output.assert_stdout_contains("--pub-cache")?;
    Ok(())
}

fn scenario_no_args(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("no-args")?;
    let output = ctx.run_spmcheck(&env, &[])?;
    output.assert_status(1)?;
    output.assert_stderr_contains("pubspec path is missing")?;
    output.assert_stdout_eq("")?;
    Ok(())
}

fn scenario_missing_pubspec_file(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("missing-pubspec")?;
    let output = ctx.run_spmcheck(&env, &["does-not-exist.yaml"])?;
    output.assert_status(1)?;
    output.assert_stderr_contains("Failed to read")?;
    Ok(())
}

fn scenario_invalid_yaml(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("invalid-yaml")?;
    let pubspec = env.write_pubspec("dependencies: [unclosed\n")?;
    let output = ctx.run_spmcheck(&env, &[&pubspec])?;
    output.assert_status(1)?;
    output.assert_stderr_contains("Failed to parse")?;
    output.assert_stdout_eq("")?;
    Ok(())
}

fn scenario_no_dependencies(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("no-deps")?;
    let pubspec = env.write_pubspec("name: app\nversion: 1.0.0+1\n")?;
    let output = ctx.run_spmcheck(&env, &[&pubspec])?;
    output.assert_success()?;
    output.assert_stdout_eq("")?;
    Ok(())
}

fn scenario_scalar_document(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("scalar-document")?;
    let pubspec = env.write_pubspec("just a string\n")?;
    let output = ctx.run_spmcheck(&env, &[&pubspec])?;
    output.assert_success()?;
    output.assert_stdout_eq("")?;
    Ok(())
}

fn scenario_found_single(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("found-single")?;
    let pubspec = env.write_pubspec("dependencies:\n  foo: ^1.0.0\n")?;
    write_file(&env.hosted.join("foo-^1.0.0/ios/Package.swift"), "")?;

    let output = ctx.run_spmcheck(&env, &[&pubspec])?;
    output.assert_success()?;
    output.assert_stdout_eq("🟢 Packages using Swift Package Manager (1/1)\n· foo ^1.0.0\n\n")?;
    Ok(())
}

fn scenario_not_downloaded_single(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("not-downloaded")?;
    let pubspec = env.write_pubspec("dependencies:\n  bar: 2.0.0\n")?;

    let output = ctx.run_spmcheck(&env, &[&pubspec])?;
    output.assert_success()?;
    output.assert_stdout_eq("⚫️ Packages not downloaded (1/1)\n· bar 2.0.0\n\n")?;
    Ok(())
}

fn scenario_mixed_buckets(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("mixed")?;
    let pubspec = env.write_pubspec(
        r#"name: app
dependencies:
  flutter:
    sdk: flutter
  url_launcher_ios: 6.3.1
  camera_avfoundation: 0.9.17
  http: ^1.2.0
  forked:
    git: https://github.com/someone/forked.git
dev_dependencies:
  http: ^1.2.0
  mockito: ^5.4.4
"#,
    )?;
    write_file(
        &env.hosted
            .join("url_launcher_ios-6.3.1/ios/url_launcher_ios/Package.swift"),
        "// swift-tools-version: 5.9\n",
    )?;
    write_file(
        &env.hosted
            .join("camera_avfoundation-0.9.17/ios/Classes/CameraPlugin.m"),
        "",
    )?;
    write_file(&env.hosted.join("http-^1.2.0/lib/http.dart"), "")?;

    let output = ctx.run_spmcheck(&env, &[&pubspec])?;
    output.assert_success()?;
    output.assert_stdout_eq(
        "\
🟢 Packages using Swift Package Manager (1/4)
· url_launcher_ios 6.3.1

🔴 Packages not using Swift Package Manager (1/4)
· camera_avfoundation 0.9.17

⚪️ Packages not built for iOS (1/4)
· http ^1.2.0

⚫️ Packages not downloaded (1/4)
· mockito ^5.4.4

",
    )?;
    Ok(())
}

fn scenario_pub_cache_env(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("pub-cache-env")?;
    let pubspec = env.write_pubspec("dependencies:\n  foo: 1.0.0\n")?;
    let custom = env.root.join("custom-cache");
    ensure_dir(&custom.join("hosted/pub.dev/foo-1.0.0/ios"))?;

    let output = ctx.run_spmcheck_with_env(
        &env,
        &[&pubspec],
        &[("PUB_CACHE", custom.as_os_str())],
    )?;
    output.assert_success()?;
    output.assert_stdout_contains("🔴 Packages not using Swift Package Manager (1/1)")?;

    // Empty value falls back to ~/.pub-cache
    let output = ctx.run_spmcheck_with_env(&env, &[&pubspec], &[("PUB_CACHE", OsStr::new(""))])?;
    output.assert_success()?;
    output.assert_stdout_contains("⚫️ Packages not downloaded (1/1)")?;
    Ok(())
}

fn scenario_pub_cache_flag(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("pub-cache-flag")?;
    let pubspec = env.write_pubspec("dependencies:\n  foo: 1.0.0\n")?;
    let custom = env.root.join("flag-cache");
    write_file(&custom.join("hosted/pub.dev/foo-1.0.0/ios/foo/Package.swift"), "")?;
    let other = env.root.join("env-cache");
    ensure_dir(&other)?;

    let custom_str = custom.display().to_string();
    let output = ctx.run_spmcheck_with_env(
        &env,
        &["--pub-cache", &custom_str, &pubspec],
        &[("PUB_CACHE", other.as_os_str())],
    )?;
    output.assert_success()?;
    output.assert_stdout_contains("🟢 Packages using Swift Package Manager (1/1)")?;
    Ok(())
}

fn scenario_json_output(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("json")?;
    let pubspec = env.write_pubspec("dependencies:\n  foo: ^1.0.0\n  bar: 2.0.0\n")?;
    write_file(&env.hosted.join("foo-^1.0.0/ios/Package.swift"), "")?;

    let output = ctx.run_spmcheck(&env, &["--json", &pubspec])?;
    output.assert_success()?;
    let json = parse_json(&output.stdout)?;

    if json["total"] != 2 {
        return Err(format!("Expected total 2, got {}", json["total"]));
    }
    if json["found"][0]["name"] != "foo" {
        return Err(format!("Expected foo in found, got {}", json["found"]));
    }
    if json["not_downloaded"][0]["directory"] != "bar-2.0.0" {
        return Err(format!(
            "Expected bar-2.0.0 in not_downloaded, got {}",
            json["not_downloaded"]
        ));
    }
    for bucket in ["not_found", "not_ios"] {
        if json[bucket] != serde_json::json!([]) {
            return Err(format!("Expected empty {}, got {}", bucket, json[bucket]));
        }
    }
    Ok(())
}

fn scenario_verbose(ctx: &TestContext) -> Result<(), String> {
    let env = ctx.create_env("verbose")?;
    let pubspec = env.write_pubspec("dependencies:\n  bar: 2.0.0\n")?;

    let output = ctx.run_spmcheck(&env, &["--verbose", &pubspec])?;
    output.assert_success()?;
    output.assert_stderr_contains("loaded pubspec")?;
    output.assert_stdout_eq("⚫️ Packages not downloaded (1/1)\n· bar 2.0.0\n\n")?;
    Ok(())
}
