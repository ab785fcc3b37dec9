// End-to-end tests: installer text on disk -> theme manifest

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::Error;
    use crate::logging::{LogRecord, Severity};
    use crate::model::{CursorRole, ThemeDescriptor};
    use crate::pipeline::convert_descriptor;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const OCEAN_INF: &str = r#"; Ocean cursor scheme
[Version]
signature = "$CHICAGO$"

[DefaultInstall]
CopyFiles = Scheme.Cur
AddReg    = Scheme.Reg

[DestinationDirs]
Scheme.Cur = 10,"%CUR_DIR%"

[Scheme.Reg]
HKCU,"Control Panel\Cursors\Schemes","%SCHEME_NAME%",,"%10%\%CUR_DIR%\%pointer%,%10%\%CUR_DIR%\%help%,%10%\%CUR_DIR%\%work%,%10%\%CUR_DIR%\%busy%,%10%\%CUR_DIR%\%cross%,%10%\%CUR_DIR%\%text%,%10%\%CUR_DIR%\%hand%,%10%\%CUR_DIR%\%unavailable%,%10%\%CUR_DIR%\%vert%,%10%\%CUR_DIR%\%horz%,%10%\%CUR_DIR%\%dgn1%,%10%\%CUR_DIR%\%dgn2%,%10%\%CUR_DIR%\%move%,%10%\%CUR_DIR%\%alternate%,%10%\%CUR_DIR%\%link%,,"
HKCU,"Control Panel\Cursors\Schemes","Ignored",,"a,b,c"

[Scheme.Cur]
arrow.cur
help.cur

[Strings]
CUR_DIR       = "Cursors\Ocean"
SCHEME_NAME   = "Ocean"
pointer       = "arrow.cur"
help          = "help.cur"
work          = "working.ani"
busy          = "busy.ani"
cross         = "cross.cur"
text          = "beam.cur"
hand          = "pen.cur"
unavailable   = "no.cur"
vert          = "ns.cur"
horz          = "ew.cur"
dgn1          = "nwse.cur"
dgn2          = "nesw.cur"
move          = "move.cur"
alternate     = "up.cur"
link          = "link.cur"
"#;

    fn write_theme_dir(root: &Path) -> std::path::PathBuf {
        let cursors = root.join("Ocean Cursors");
        fs::create_dir_all(&cursors).unwrap();
        fs::write(cursors.join("arrow.cur"), b"").unwrap();
        let inf = root.join("Install.inf");
        fs::write(&inf, OCEAN_INF).unwrap();
        inf
    }

    #[test]
    fn test_full_pipeline_inf_to_manifest() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        let inf = write_theme_dir(&root);

        let config = Config::new().with_search_root(&root);
        let (mut tx, rx) = crossbeam_channel::unbounded::<LogRecord>();
        let theme = convert_descriptor(&inf, &config, &mut tx).unwrap();
        drop(tx);

        assert_eq!(theme.theme(), "Ocean");
        assert_eq!(theme.version(), "0.1.0");

        // pin and person are empty in the scheme.
        assert_eq!(theme.cursors().len(), 15);
        assert!(theme.cursor("pin").is_none());
        assert!(theme.cursor("person").is_none());

        let names: Vec<&str> = theme.cursors().iter().map(|c| c.name()).collect();
        let expected: Vec<&str> = CursorRole::ALL[..15].iter().map(|r| r.name()).collect();
        assert_eq!(names, expected);

        assert_eq!(
            theme.cursor("default").unwrap().input(),
            "./Ocean Cursors/arrow.cur"
        );
        assert_eq!(
            theme.cursor("text").unwrap().input(),
            "./Ocean Cursors/beam.cur"
        );
        assert_eq!(
            theme.cursor("text").unwrap().aliases(),
            &["xterm".to_string()]
        );

        let records: Vec<LogRecord> = rx.iter().collect();
        assert!(records.iter().all(|r| r.severity != Severity::Warn));
        assert!(records.iter().any(|r| r.severity == Severity::Info));
    }

    #[test]
    fn test_minimal_descriptor_single_cursor() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("cursors")).unwrap();
        fs::write(root.join("cursors/default.cur"), b"").unwrap();

        let paths = format!(r"%10%\Cursors\default.cur{}", ",".repeat(16));
        let text = format!(
            "[Scheme.Reg]\nHKCU,\"Control Panel\\Cursors\\Schemes\",\"%SCHEME_NAME%\",,\"{paths}\"\n\n[Strings]\nSCHEME_NAME = \"Test\"\n"
        );
        let inf = root.join("Install.inf");
        fs::write(&inf, text).unwrap();

        let config = Config::new().with_search_root(&root);
        let theme = convert_descriptor(&inf, &config, &mut |_: Severity, _: String| {}).unwrap();

        assert_eq!(theme.theme(), "Test");
        assert_eq!(theme.cursors().len(), 1);
        assert_eq!(theme.cursors()[0].name(), "default");
        assert_eq!(theme.cursors()[0].input(), "./cursors/default.cur");
    }

    #[test]
    fn test_manifest_round_trips_through_toml() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        let inf = write_theme_dir(&root);

        let config = Config::new().with_search_root(&root);
        let theme = convert_descriptor(&inf, &config, &mut |_: Severity, _: String| {}).unwrap();

        let manifest = root.join("Cursor.toml");
        theme.save_to_file(&manifest).unwrap();
        let text = fs::read_to_string(&manifest).unwrap();
        assert!(text.contains("theme = \"Ocean\""));
        assert!(text.contains("[[cursor]]"));
        assert!(!text.contains("name = \"pin\""));

        assert_eq!(ThemeDescriptor::load_from_file(&manifest).unwrap(), theme);
    }

    #[test]
    fn test_theme_name_override_and_fallback() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        let theme_dir = root.join("Sunset");
        fs::create_dir_all(&theme_dir).unwrap();

        let text = format!(
            "[Scheme.Reg]\nHKCU,x,\"%MISSING%\",,\"{}\"\n[Strings]\n",
            vec!["arrow.cur"; 17].join(",")
        );
        let inf = theme_dir.join("Install.inf");
        fs::write(&inf, text).unwrap();

        let config = Config::new().with_search_root(&root);
        let mut warnings = Vec::new();
        let theme = convert_descriptor(&inf, &config, &mut |severity: Severity, message: String| {
            if severity == Severity::Warn {
                warnings.push(message);
            }
        })
        .unwrap();
        assert_eq!(theme.theme(), "Sunset");
        // unresolved name plus the missing arrow.cur
        assert_eq!(warnings.len(), 2);

        let config = config.with_theme_name("Dusk");
        let theme = convert_descriptor(&inf, &config, &mut |_: Severity, _: String| {}).unwrap();
        assert_eq!(theme.theme(), "Dusk");
    }

    #[test]
    fn test_errors_propagate_with_kind() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        let config = Config::new().with_search_root(&root);

        let malformed = root.join("malformed.inf");
        fs::write(&malformed, "[Strings]\nNAME = \"open\n").unwrap();
        let err = convert_descriptor(&malformed, &config, &mut |_: Severity, _: String| {})
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedDescriptor { line: 2, .. })
        ));

        let no_scheme = root.join("no_scheme.inf");
        fs::write(&no_scheme, "[Strings]\nNAME = x\n").unwrap();
        let err = convert_descriptor(&no_scheme, &config, &mut |_: Severity, _: String| {})
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::MissingScheme)));

        let short = root.join("short.inf");
        fs::write(&short, "[Scheme.Reg]\nHKCU,x,y,,\"a,b\"\n[Strings]\n").unwrap();
        let err = convert_descriptor(&short, &config, &mut |_: Severity, _: String| {})
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedScheme { found: 2, .. })
        ));

        let missing = root.join("missing.inf");
        assert!(convert_descriptor(&missing, &config, &mut |_: Severity, _: String| {}).is_err());
    }
}
