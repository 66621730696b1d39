use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_extract_writes_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
export function Cart({ count }) {
    //; Checkout button label
    const label = _t('Pay now');
    return (
        <div>
            {/*; Cart heading */}
            <h1>{_t('Your cart')}</h1>
            <p>{_nt(['%1 item', '%1 items'], count)}</p>
            <button>{label}</button>
        </div>
    );
}
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Extracted 3 entries from 1 source file
    ");

    assert_snapshot!(test.read_file("i18n/catalog.json")?, @r#"
    {
      "Pay now": {
        "type": "single",
        "entry": "Pay now",
        "occurrences": [
          {
            "file": "src/app.tsx",
            "location": {
              "line": 3,
              "character": 18
            }
          }
        ],
        "translations": [],
        "comments": [
          "Checkout button label"
        ]
      },
      "Your cart": {
        "type": "single",
        "entry": "Your cart",
        "occurrences": [
          {
            "file": "src/app.tsx",
            "location": {
              "line": 7,
              "character": 17
            }
          }
        ],
        "translations": [],
        "comments": [
          "Cart heading"
        ]
      },
      "plural\u0004\u0000%1 item\u0000%1 items\u0000": {
        "type": "plural",
        "entry": [
          "%1 item",
          "%1 items"
        ],
        "occurrences": [
          {
            "file": "src/app.tsx",
            "location": {
              "line": 8,
              "character": 16
            }
          }
        ],
        "translations": [],
        "comments": []
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::with_file("app.tsx", "_t('Hello');\n")?;

    assert_cmd_snapshot!(test.extract_command().args(["--output", "-"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "Hello": {
        "type": "single",
        "entry": "Hello",
        "occurrences": [
          {
            "file": "app.tsx",
            "location": {
              "line": 0,
              "character": 0
            }
          }
        ],
        "translations": [],
        "comments": []
      }
    }

    ----- stderr -----
    ✓ Extracted 1 entry from 1 source file
    "#);
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_extract_reports_failed_call_sites() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
const ok = _t('Saved');
const bad = _t('Hello %1');
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [i18n-extract ERROR] _t: optional arguments count mismatch
    [i18n-extract ERROR] Location: src/app.tsx:3:13
    warning: 1 call site(s) could not be extracted
    ✓ Extracted 1 entry from 1 source file
    ");

    // The catalog is still written without the failed call site.
    let catalog = test.read_catalog("i18n/catalog.json")?;
    let keys: Vec<&String> = catalog.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["Saved"]);

    Ok(())
}

#[test]
fn test_extract_nested_calls() -> Result<()> {
    let test = CliTest::with_file(
        "src/item.ts",
        r#"
const text = i18n._pt('Item', 'Translation %1 %2 %3', [
  1,
  cond ? i18n._t('valid') : fallback() || i18n._t('invalid %1'),
  3,
]);
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().args(["--output", "-"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    {
      "context\u0004Translation %1 %2 %3\u0004Item": {
        "type": "context",
        "entry": "Translation %1 %2 %3",
        "context": "Item",
        "occurrences": [
          {
            "file": "src/item.ts",
            "location": {
              "line": 1,
              "character": 18
            }
          }
        ],
        "translations": [],
        "comments": []
      },
      "valid": {
        "type": "single",
        "entry": "valid",
        "occurrences": [
          {
            "file": "src/item.ts",
            "location": {
              "line": 3,
              "character": 14
            }
          }
        ],
        "translations": [],
        "comments": []
      }
    }

    ----- stderr -----
    [i18n-extract ERROR] _t: optional arguments count mismatch
    [i18n-extract ERROR] Location: src/item.ts:4:48
    warning: 1 call site(s) could not be extracted
    ✓ Extracted 2 entries from 1 source file
    "#);

    Ok(())
}

#[test]
fn test_extract_keeps_comments_with_their_call() -> Result<()> {
    let test = CliTest::with_file(
        "src/list.tsx",
        r#"
const labels = [/*; first label */ _t('One'), /*; second label */ _t('Two')];
_t('Three'); /*; trails three
   on two lines */
_t('Four');
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Extracted 4 entries from 1 source file
    ");

    let catalog = test.read_catalog("i18n/catalog.json")?;
    assert_eq!(catalog["One"]["comments"], serde_json::json!(["first label"]));
    assert_eq!(catalog["Two"]["comments"], serde_json::json!(["second label"]));
    assert_eq!(catalog["Three"]["comments"], serde_json::json!([]));
    assert_eq!(catalog["Four"]["comments"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_extract_merges_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/b.tsx", "_t('Save');\n")?;
    test.write_file("src/a.tsx", "//; Toolbar\n_t('Save');\n")?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Extracted 1 entry from 2 source files
    ");

    assert_snapshot!(test.read_file("i18n/catalog.json")?, @r#"
    {
      "Save": {
        "type": "single",
        "entry": "Save",
        "occurrences": [
          {
            "file": "src/a.tsx",
            "location": {
              "line": 1,
              "character": 0
            }
          },
          {
            "file": "src/b.tsx",
            "location": {
              "line": 0,
              "character": 0
            }
          }
        ],
        "translations": [],
        "comments": [
          "Toolbar"
        ]
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_extract_with_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nextractrc.json",
        r#"{
            "includes": ["src"],
            "ignores": ["**/generated/**"],
            "output": "locales/source.json",
            "commentMarker": "i18n:",
            "functions": { "single": ["tr"] }
        }"#,
    )?;
    test.write_file("src/app.ts", "//i18n: Greeting\ntr('Hello');\n_t('Not a function');\n")?;
    test.write_file("src/generated/strings.ts", "tr('Generated');\n")?;
    test.write_file("scripts/build.ts", "tr('Outside includes');\n")?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Extracted 1 entry from 1 source file
    ");

    let catalog = test.read_catalog("locales/source.json")?;
    let keys: Vec<&String> = catalog.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["Hello"]);
    assert_eq!(catalog["Hello"]["comments"][0], "Greeting");

    Ok(())
}

#[test]
fn test_extract_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/src/page.jsx", "_t('Welcome');\n")?;
    test.write_file("other/page.jsx", "_t('Elsewhere');\n")?;

    assert_cmd_snapshot!(
        test.extract_command().args(["--source-root", "web", "-o", "catalog.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Extracted 1 entry from 1 source file
    "
    );

    let catalog = test.read_catalog("catalog.json")?;
    assert_eq!(catalog.as_object().unwrap().len(), 1);
    assert_eq!(catalog["Welcome"]["occurrences"][0]["file"], "src/page.jsx");

    Ok(())
}

#[test]
fn test_extract_skips_unparsable_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/ok.tsx", "_t('Fine');\n")?;
    test.write_file("src/broken.tsx", "const = ;\n")?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Extracted 1 entry from 1 source file
    warning: 1 file(s) could not be parsed (use -v for details)
    ");

    Ok(())
}

#[test]
fn test_extract_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".i18nextractrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    assert_cmd_snapshot!(test.extract_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'ignores': "[invalid"
    "#);
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_extract_malformed_config_names_its_path() -> Result<()> {
    let test = CliTest::with_file(".i18nextractrc.json", "{ not json")?;

    insta::with_settings!({ filters => test.filters() }, {
        assert_cmd_snapshot!(
            test.extract_command().arg("--source-root").arg(test.root()),
            @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse config file: "[TEMP_DIR]/.i18nextractrc.json"
        "#
        );
    });

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for extracting translatable strings from JS/TS sources into a translation catalog

    Usage: i18n-extract [COMMAND]

    Commands:
      extract  Extract translatable strings from source files into a catalog
      init     Initialize a new .i18nextractrc.json configuration file
      help     Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
