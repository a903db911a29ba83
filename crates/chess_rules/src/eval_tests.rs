use super::*;
use crate::board::ChessBoard;

#[test]
fn test_values_are_ordered() {
    let v = |k| kind_value(k);
    assert!(v(PieceKind::Pawn) < v(PieceKind::Knight));
    assert_eq!(v(PieceKind::Knight), v(PieceKind::Bishop));
    assert!(v(PieceKind::Bishop) < v(PieceKind::Rook));
    assert!(v(PieceKind::Rook) < v(PieceKind::Queen));
    assert!(v(PieceKind::Queen) < v(PieceKind::King));
}

#[test]
fn test_value_ignores_color() {
    for kind in PieceKind::ALL {
        assert_eq!(
            static_value(&Piece::new(kind, Color::White)),
            static_value(&Piece::new(kind, Color::Black))
        );
    }
}

#[test]
fn test_king_dominates_all_other_material() {
    // Both full armies without kings, plus every pawn promoted to a queen.
    let other: u32 = 2 * (8 * kind_value(PieceKind::Queen)
        + 2 * kind_value(PieceKind::Rook)
        + 2 * kind_value(PieceKind::Knight)
        + 2 * kind_value(PieceKind::Bishop)
        + kind_value(PieceKind::Queen));
    assert!(KING_VALUE > other);
}

#[test]
fn test_balance_is_symmetric() {
    assert_eq!(material_balance(&ChessBoard::standard()), 0);

    // White is a rook up.
    let b = ChessBoard::from_placement("1nbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
    assert_eq!(material_balance(&b), 5);

    // Black is a queen and a pawn up.
    let b = ChessBoard::from_placement("rnbqkbnr/pppppppp/8/8/8/8/1PPPPPPP/RNB1KBNR").unwrap();
    assert_eq!(material_balance(&b), -11);
}

#[test]
fn test_lone_king_decides_balance() {
    let b = ChessBoard::from_placement("8/8/8/8/8/8/8/QQQQK3").unwrap();
    assert_eq!(material_balance(&b), 40 + i64::from(KING_VALUE));
}

#[test]
fn test_default_table_matches_static_values() {
    let t = MaterialTable::default();
    t.validate().unwrap();
    for kind in PieceKind::ALL {
        assert_eq!(t.value(kind), kind_value(kind));
    }
}

#[test]
fn test_table_from_toml() {
    let t = MaterialTable::from_toml_str(
        r#"
        pawn = 100
        knight = 320
        bishop = 330
        rook = 500
        queen = 900
        king = 100000
        "#,
    )
    .unwrap();
    assert_eq!(t.bishop, 330);
    let b = ChessBoard::from_placement("4k3/8/8/8/8/8/8/2B1K3").unwrap();
    assert_eq!(t.balance(&b), 330);
}

#[test]
fn test_table_partial_toml_keeps_defaults() {
    let t = MaterialTable::from_toml_str("queen = 9").unwrap();
    assert_eq!(t.queen, 9);
    assert_eq!(t.rook, 5);
    assert_eq!(t.king, KING_VALUE);
}

#[test]
fn test_table_toml_round_trip() {
    let t = MaterialTable::default();
    let text = t.to_toml_string().unwrap();
    assert_eq!(MaterialTable::from_toml_str(&text).unwrap(), t);
}

#[test]
fn test_table_rejects_bad_values() {
    for text in [
        "pawn = 0",
        "knight = 1",
        "bishop = 6",
        "rook = 10",
        "king = 300",
        "queen = 400000",
    ] {
        assert!(
            matches!(MaterialTable::from_toml_str(text), Err(ConfigError::Invalid(_))),
            "{text} should be rejected"
        );
    }
}

#[test]
fn test_table_rejects_unknown_keys_and_bad_syntax() {
    assert!(matches!(
        MaterialTable::from_toml_str("archbishop = 7"),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        MaterialTable::from_toml_str("pawn = -1"),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        MaterialTable::from_toml_str("pawn = "),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_table_load_missing_file() {
    let path = std::path::Path::new("/nonexistent/material.toml");
    assert!(matches!(MaterialTable::load(path), Err(ConfigError::Io(_))));
}

#[test]
fn test_serialize_error_keeps_its_own_variant() {
    // A bare integer is not a TOML document.
    let err: ConfigError = toml::to_string(&1u32).unwrap_err().into();
    assert!(matches!(err, ConfigError::TomlSer(_)));
}
