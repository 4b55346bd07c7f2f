use fliplearn_types::{
    AppEvent, CardFace, CardView, EditorSnapshot, ErrorKind, Notice, SetSummary, UiCommand,
    WordPair,
};

use crate::ui::{ParseError, parse_command, render};

#[test]
fn test_blank_line_is_no_command() {
    assert_eq!(parse_command("   "), Ok(None));
}

#[test]
fn test_indices_are_one_based() {
    assert_eq!(parse_command("edit 1"), Ok(Some(UiCommand::EditSet(0))));
    assert_eq!(parse_command("DELETE 3"), Ok(Some(UiCommand::DeleteSet(2))));
    assert_eq!(parse_command("translate 2"), Ok(Some(UiCommand::Translate(1))));
}

#[test]
fn test_zero_and_garbage_indices_are_rejected() {
    assert_eq!(
        parse_command("remove 0"),
        Err(ParseError::BadIndex("0".to_string()))
    );
    assert_eq!(
        parse_command("study two"),
        Err(ParseError::BadIndex("two".to_string()))
    );
    assert_eq!(parse_command("edit"), Err(ParseError::MissingIndex("edit")));
}

#[test]
fn test_text_keeps_inner_spaces() {
    assert_eq!(
        parse_command("set 1 iyi günler"),
        Ok(Some(UiCommand::SetWord {
            index: 0,
            text: "iyi günler".to_string()
        }))
    );
    assert_eq!(
        parse_command("meaning 2   good day "),
        Ok(Some(UiCommand::SetMeaning {
            index: 1,
            text: "good day".to_string()
        }))
    );
    assert_eq!(parse_command("set 1"), Err(ParseError::MissingText("set")));
}

#[test]
fn test_save_passes_name_through() {
    assert_eq!(
        parse_command("save My Animals"),
        Ok(Some(UiCommand::Save("My Animals".to_string())))
    );
    // Blank name reaches the editor, which reports it
    assert_eq!(parse_command("save"), Ok(Some(UiCommand::Save(String::new()))));
}

#[test]
fn test_unknown_command() {
    assert_eq!(
        parse_command("fly away"),
        Err(ParseError::Unknown("fly".to_string()))
    );
}

#[test]
fn test_render_set_list_numbers_from_one() {
    let event = AppEvent::ShowSets(vec![
        SetSummary {
            name: "Animals".to_string(),
            word_count: 3,
        },
        SetSummary {
            name: "Colors".to_string(),
            word_count: 1,
        },
    ]);

    let text = render(&event).unwrap();
    assert!(text.contains("1. Animals (3 words)"));
    assert!(text.contains("2. Colors (1 words)"));
}

#[test]
fn test_render_editor_marks_blank_fields() {
    let event = AppEvent::ShowEditor(EditorSnapshot {
        editing: Some("Animals".to_string()),
        entries: vec![WordPair::new("kedi", ""), WordPair::default()],
    });

    let text = render(&event).unwrap();
    assert!(text.starts_with("Editing 'Animals'"));
    assert!(text.contains("1. kedi = ..."));
    assert!(text.contains("2. ... = ..."));
}

#[test]
fn test_render_card_and_notices() {
    let card = AppEvent::ShowCard(CardView {
        position: 2,
        total: 5,
        face: CardFace::Back,
        text: "elma".to_string(),
        completed: false,
    });
    assert_eq!(render(&card).unwrap(), "[2/5] (back)  elma");

    let notice = AppEvent::Notice(Notice::error(
        ErrorKind::EmptyInput,
        "Please give your set a name",
    ));
    assert_eq!(
        render(&notice).unwrap(),
        "! Please give your set a name (empty input)"
    );

    assert_eq!(render(&AppEvent::Quit), None);
}
