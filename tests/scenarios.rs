use bmpedit::command::{self, Command, Tokens, parse_next};
use bmpedit::draw::{BLACK, Color, GREEN, RED, WHITE};
use bmpedit::image::codec;
use bmpedit::{PixelBuffer, Session};
use std::fs;

#[test]
fn edit_session_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let canvas = temp.path().join("canvas.bmp");
    let stamp = temp.path().join("stamp.bmp");
    let result = temp.path().join("result.bmp");

    fs::write(
        &canvas,
        codec::encode(&PixelBuffer::filled(10, 8, WHITE).unwrap()),
    )
    .unwrap();
    fs::write(
        &stamp,
        codec::encode(&PixelBuffer::filled(3, 3, GREEN).unwrap()),
    )
    .unwrap();

    let script = format!(
        "edit {canvas}\n\
         set d 255 0 0\n\
         draw r 0 0 9 7\n\
         set d 0 0 0\n\
         fill 4 4\n\
         insert {stamp} 8 6\n\
         save {result}\n\
         quit\n",
        canvas = canvas.display(),
        stamp = stamp.display(),
        result = result.display(),
    );

    let mut session = Session::new();
    let mut report = Vec::new();
    command::run(&mut session, script.as_bytes(), &mut report).unwrap();
    assert!(report.is_empty());

    let saved = codec::decode(&fs::read(&result).unwrap()).unwrap();
    assert_eq!((saved.width(), saved.height()), (10, 8));

    // Outline covers the whole border, interior is filled black.
    let border = 2 * 10 + 2 * 8 - 4;
    let stamp_pixels = 2 * 2;
    assert_eq!(saved.count_color(GREEN), stamp_pixels);
    assert_eq!(saved.count_color(RED), border - 3);
    assert_eq!(saved.count_color(BLACK), 10 * 8 - border - 1);
    assert_eq!(saved.pixel(9, 7), Some(GREEN));
    assert_eq!(saved.pixel(0, 0), Some(RED));
    assert_eq!(saved.count_color(WHITE), 0);
    assert_eq!(session.image(), Some(&saved));
}

#[test]
fn parsed_commands_apply_one_by_one() {
    let mut session = Session::new();
    session.replace_image(PixelBuffer::new(4, 4).unwrap());

    let mut tokens = Tokens::new("set d 9 9 9 set l 3 draw l 1 1 1 1".as_bytes());
    while let Some(parsed) = parse_next(&mut tokens).unwrap() {
        assert_ne!(parsed, Command::Quit);
        command::execute(&mut session, &parsed).unwrap();
    }

    let image = session.image().unwrap();
    assert_eq!(image.count_color(Color::new(9, 9, 9)), 9);
    assert_eq!(image.pixel(3, 3), Some(BLACK));
}
