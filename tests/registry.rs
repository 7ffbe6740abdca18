use brush_blocks::{brush, BlockRegistry, RegistryError, Shape, ValueType};

#[test]
fn palette_keeps_listed_order() {
    let registry = BlockRegistry::with_builtins();
    let ids: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "brush_down",
            "brush_up",
            "brush_position",
            "brush_get_color",
            "brush_set_color",
        ]
    );
    assert_eq!(registry.len(), 5);
}

#[test]
fn set_color_is_a_statement_with_inline_colour_input() {
    let registry = BlockRegistry::with_builtins();
    let block = registry.lookup("brush_set_color").expect("блок не найден");
    assert_eq!(block.shape, Shape::Statement);
    assert!(block.inline_inputs);
    assert_eq!(block.inputs.len(), 1);
    assert_eq!(block.inputs[0].name, "VAL");
    assert_eq!(block.inputs[0].check, ValueType::Colour);
    assert_eq!(block.label, "setBrushColor");
}

#[test]
fn unknown_block_is_not_found() {
    let registry = BlockRegistry::with_builtins();
    assert_eq!(
        registry.lookup("brush_fly"),
        Err(RegistryError::NotFound("brush_fly".into()))
    );
}

#[test]
fn second_registration_of_builtin_fails() {
    let mut registry = BlockRegistry::with_builtins();
    assert_eq!(
        registry.register(brush::brush_down()),
        Err(RegistryError::DuplicateId("brush_down".into()))
    );
    // реестр не изменился
    assert_eq!(registry.len(), 5);
}

#[test]
fn getters_expose_output_types() {
    let registry = BlockRegistry::with_builtins();
    let position = registry.lookup("brush_position").unwrap();
    assert_eq!(position.shape, Shape::ValueOutput(ValueType::Boolean));
    let color = registry.lookup("brush_get_color").unwrap();
    assert_eq!(color.output_type(), Some(ValueType::Colour));
    assert!(color.inputs.is_empty());
}
