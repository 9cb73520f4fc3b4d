use extman_domain::ExtensionFilter;
use extman_ui::UiCommand;

#[test]
fn test_parse_filter() {
    assert_eq!(
        "filter active".parse::<UiCommand>(),
        Ok(UiCommand::Filter(ExtensionFilter::Active))
    );
    assert_eq!(
        "f inactive".parse::<UiCommand>(),
        Ok(UiCommand::Filter(ExtensionFilter::Inactive))
    );
    assert!("filter".parse::<UiCommand>().is_err());
    assert!("filter enabled".parse::<UiCommand>().is_err());
}

#[test]
fn test_parse_toggle_and_remove() {
    assert_eq!("toggle 3".parse::<UiCommand>(), Ok(UiCommand::Toggle(3)));
    assert_eq!("  t 12  ".parse::<UiCommand>(), Ok(UiCommand::Toggle(12)));
    assert_eq!("remove 1".parse::<UiCommand>(), Ok(UiCommand::Remove(1)));
    assert_eq!("rm 7".parse::<UiCommand>(), Ok(UiCommand::Remove(7)));
}

#[test]
fn test_parse_rejects_non_numeric_id() {
    assert!("toggle abc".parse::<UiCommand>().is_err());
    assert!("remove".parse::<UiCommand>().is_err());
    assert!("remove 1 2".parse::<UiCommand>().is_err());
}

#[test]
fn test_parse_simple_commands() {
    assert_eq!("theme".parse::<UiCommand>(), Ok(UiCommand::Theme));
    assert_eq!("refresh".parse::<UiCommand>(), Ok(UiCommand::Refresh));
    assert_eq!("help".parse::<UiCommand>(), Ok(UiCommand::Help));
    assert_eq!("QUIT".parse::<UiCommand>(), Ok(UiCommand::Quit));
    assert!("theme dark".parse::<UiCommand>().is_err());
}

#[test]
fn test_parse_unknown_and_empty() {
    assert!("".parse::<UiCommand>().is_err());
    assert!("dance".parse::<UiCommand>().unwrap_err().contains("unknown command"));
}
