use super::*;

fn prompt(input: &str) -> (Transform, String) {
    let mut reader = std::io::Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let t = prompt_selection(&mut reader, &mut out).unwrap();
    (t, String::from_utf8(out).unwrap())
}

#[test]
fn menu_numbers_map_to_choices() {
    assert_eq!(EffectChoice::from_menu_number(1), EffectChoice::Invert);
    assert_eq!(EffectChoice::from_menu_number(2), EffectChoice::Brightness);
    assert_eq!(EffectChoice::from_menu_number(3), EffectChoice::Threshold);
}

#[test]
fn unrecognized_choices_fall_back_to_invert() {
    for n in [0, 4, -1, 99] {
        assert_eq!(EffectChoice::from_menu_number(n), EffectChoice::Invert);
    }
    assert_eq!(EffectChoice::parse_lenient("sepia"), EffectChoice::Invert);
    assert_eq!(EffectChoice::parse_lenient(""), EffectChoice::Invert);
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!(EffectChoice::parse_lenient(" Threshold "), EffectChoice::Threshold);
    assert_eq!(EffectChoice::parse_lenient("BRIGHTNESS"), EffectChoice::Brightness);
    assert_eq!(
        EffectChoice::parse_lenient("brightness-adjust"),
        EffectChoice::Brightness
    );
    assert_eq!(EffectChoice::parse_lenient("2"), EffectChoice::Brightness);
}

#[test]
fn into_transform_attaches_only_the_relevant_parameter() {
    assert_eq!(EffectChoice::Invert.into_transform(5, 6), Transform::Invert);
    assert_eq!(
        EffectChoice::Brightness.into_transform(5, 6),
        Transform::BrightnessAdjust { delta: 5 }
    );
    assert_eq!(
        EffectChoice::Threshold.into_transform(5, 6),
        Transform::Threshold { level: 6 }
    );
}

#[test]
fn prompt_brightness_reads_and_clamps_delta() {
    let (t, out) = prompt("2\n-50\n");
    assert_eq!(t, Transform::BrightnessAdjust { delta: -50 });
    assert!(out.contains("Enter brightness delta (-100 to +100): "));

    let (t, _) = prompt("2\n500\n");
    assert_eq!(t, Transform::BrightnessAdjust { delta: 100 });
}

#[test]
fn prompt_threshold_defaults_and_clamps_level() {
    let (t, out) = prompt("3\nabc\n");
    assert_eq!(t, Transform::Threshold { level: 128 });
    assert!(out.contains("Enter threshold (0-255): "));

    let (t, _) = prompt("3\n-4\n");
    assert_eq!(t, Transform::Threshold { level: 0 });
}

#[test]
fn prompt_garbage_or_eof_means_invert() {
    let (t, out) = prompt("x\n");
    assert_eq!(t, Transform::Invert);
    assert!(out.starts_with("Choose Processing Effect:"));
    assert!(!out.contains("Enter"));

    let (t, _) = prompt("");
    assert_eq!(t, Transform::Invert);
}

#[test]
fn prompt_non_utf8_input_falls_back() {
    let mut reader = std::io::Cursor::new(vec![0xff, 0xfe, b'\n']);
    let t = prompt_selection(&mut reader, &mut Vec::<u8>::new()).unwrap();
    assert_eq!(t, Transform::Invert);

    let mut reader = std::io::Cursor::new(b"2\n\xff\xfe\n".to_vec());
    let t = prompt_selection(&mut reader, &mut Vec::<u8>::new()).unwrap();
    assert_eq!(t, Transform::BrightnessAdjust { delta: 0 });

    let mut reader = std::io::Cursor::new(b"3\n\xc3\n".to_vec());
    let t = prompt_selection(&mut reader, &mut Vec::<u8>::new()).unwrap();
    assert_eq!(t, Transform::Threshold { level: 128 });
}

struct FailingReader;

impl std::io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("stdin gone"))
    }
}

#[test]
fn prompt_read_failure_is_an_error() {
    let mut reader = std::io::BufReader::new(FailingReader);
    assert!(prompt_selection(&mut reader, &mut Vec::<u8>::new()).is_err());
}

#[test]
fn into_transform_clamps_to_menu_ranges() {
    assert_eq!(
        EffectChoice::Brightness.into_transform(500, 0),
        Transform::BrightnessAdjust { delta: 100 }
    );
    assert_eq!(
        EffectChoice::Brightness.into_transform(i32::MIN, 0),
        Transform::BrightnessAdjust { delta: -100 }
    );
    assert_eq!(
        EffectChoice::Threshold.into_transform(0, 300),
        Transform::Threshold { level: 255 }
    );
    assert_eq!(
        EffectChoice::Threshold.into_transform(0, -1),
        Transform::Threshold { level: 0 }
    );
}

#[test]
fn clamp_params_keeps_in_range_values() {
    for t in [
        Transform::Invert,
        Transform::BrightnessAdjust { delta: -100 },
        Transform::BrightnessAdjust { delta: 42 },
        Transform::Threshold { level: 255 },
    ] {
        assert_eq!(clamp_params(t), t);
    }
}
