//! End-to-end recognition and cadence replay

use pcset_core::{
    from_cadence, recognize, to_cadence, transpose_cadence, Inversion, Movement, NoteName,
    PitchClass, Spelling,
};

#[test]
fn test_c_major_root_position() {
    let chord = recognize(Spelling::Sharp, &[0, 4, 7]).unwrap();
    assert!(chord.functionality.contains("maj"));
    assert_eq!(chord.inversion(), Inversion::Root);
    assert_eq!(chord.show(), "C maj");
    assert_eq!(chord.to_string(), "C maj");
}

#[test]
fn test_c_minor_root_position() {
    let chord = recognize(Spelling::Sharp, &[0, 3, 7]).unwrap();
    assert!(chord.functionality.contains("min"));
    assert_eq!(chord.show(), "C min");
}

#[test]
fn test_third_in_bass_recovers_the_same_chord() {
    let root_position = recognize(Spelling::Sharp, &[0, 4, 7]).unwrap();
    let inverted = recognize(Spelling::Sharp, &[4, 0, 7]).unwrap();

    assert_eq!(inverted.root, root_position.root);
    assert_eq!(inverted.base_functionality(), root_position.functionality);
    assert_eq!(inverted.functionality, "maj_1stInv");
}

#[test]
fn test_every_major_triad_in_every_inversion() {
    for root in 0..12 {
        let (third, fifth) = (root + 4, root + 7);
        let voicings = [
            ([root, third, fifth], Inversion::Root),
            ([third, root, fifth], Inversion::First),
            ([fifth, root, third], Inversion::Second),
        ];
        for (tones, inversion) in voicings {
            let chord = recognize(Spelling::Sharp, &tones).unwrap();
            assert_eq!(chord.root_pitch(), PitchClass::from(root), "{tones:?}");
            assert_eq!(chord.base_functionality(), "maj", "{tones:?}");
            assert_eq!(chord.inversion(), inversion, "{tones:?}");
        }
    }
}

#[test]
fn test_spelling_choice_names_the_root() {
    let sharp = recognize(Spelling::Sharp, &[1, 5, 8]).unwrap();
    let flat = recognize(Spelling::Flat, &[1, 5, 8]).unwrap();
    assert_eq!(sharp.root, NoteName::Cs);
    assert_eq!(flat.root, NoteName::Db);
    assert_eq!(sharp.root.pitch_class(), flat.root.pitch_class());
}

#[test]
fn test_over_specified_input_reduces_to_consonant_core() {
    // G7 with doubled root and tones outside one octave
    let chord = recognize(Spelling::Sharp, &[7, 11, 14, 17, 19]).unwrap();
    assert_eq!(chord.root, NoteName::G);
    assert_eq!(chord.functionality, "maj");
    assert_eq!(chord.tones, [7, 11, 2].map(PitchClass::from).to_vec());
    assert_eq!(chord.show(), "G maj");
}

#[test]
fn test_ii_v_i_cadence_replays_in_another_key() {
    let g7 = recognize(Spelling::Sharp, &[7, 11, 2, 5]).unwrap();
    let c = recognize(Spelling::Sharp, &[0, 4, 7]).unwrap();
    let cadence = to_cadence(&g7, &c);
    assert_eq!(cadence.movement, Movement::Ascending(PitchClass::from(5)));

    // Same resolution starting from A7 lands on D
    let d = from_cadence(Spelling::Sharp, NoteName::A, &cadence).unwrap();
    assert_eq!(d.show(), "D maj");

    // Fixed placement puts the target on the given root
    let e = transpose_cadence(Spelling::Sharp, NoteName::E, &cadence).unwrap();
    assert_eq!(e.show(), "E maj");
}

#[test]
fn test_flat_recognition_spells_the_bass_flat() {
    let chord = recognize(Spelling::Flat, &[3, 7, 0]).unwrap();
    assert_eq!(chord.to_string(), "C min/Eb");
}

#[test]
fn test_unknown_names_fail() {
    assert!("H".parse::<NoteName>().is_err());
    assert!(recognize::<i32>(Spelling::Flat, &[]).is_err());
}
