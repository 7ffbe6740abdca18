//! Встроенные блоки кисти.
//!
//! Пять дескрипторов, управляющих кистью рисующего исполнителя: опустить,
//! поднять, опросить положение, прочитать и изменить цвет. Все блоки
//! делят один оттенок палитры.

use crate::descriptor::{BlockDescriptor, ValueType};

/// Оттенок всех блоков кисти.
pub const BRUSH_HUE: f32 = 330.0;

/// Оператор `brushDown`: опускает кисть.
pub fn brush_down() -> BlockDescriptor {
    BlockDescriptor::statement("brush_down", "brushDown")
        .colour(BRUSH_HUE)
        .tooltip("Brush down")
}

/// Оператор `brushUp`: поднимает кисть.
pub fn brush_up() -> BlockDescriptor {
    BlockDescriptor::statement("brush_up", "brushUp")
        .colour(BRUSH_HUE)
        .tooltip("Brush up")
}

/// Выражение `isBrushDown`: опущена ли кисть.
pub fn brush_position() -> BlockDescriptor {
    BlockDescriptor::value_output("brush_position", "isBrushDown", ValueType::Boolean)
        .colour(BRUSH_HUE)
        .tooltip("Get brush position.")
}

/// Выражение `getBrushColor`: текущий цвет кисти.
pub fn brush_get_color() -> BlockDescriptor {
    BlockDescriptor::value_output("brush_get_color", "getBrushColor", ValueType::Colour)
        .colour(BRUSH_HUE)
        .tooltip("Get the color of the brush.")
}

/// Оператор `setBrushColor`: меняет цвет кисти.
///
/// Единственный блок набора с входным сокетом: принимает значение типа
/// `Colour` во встроенный вход `VAL`.
pub fn brush_set_color() -> BlockDescriptor {
    BlockDescriptor::statement("brush_set_color", "setBrushColor")
        .colour(BRUSH_HUE)
        .value_input("VAL", ValueType::Colour)
        .inline()
        .tooltip("Change the brush color.")
}

/// Все блоки кисти в порядке палитры.
pub fn all() -> Vec<BlockDescriptor> {
    vec![
        brush_down(),
        brush_up(),
        brush_position(),
        brush_get_color(),
        brush_set_color(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_are_valid() {
        for block in all() {
            assert!(block.validate().is_ok(), "блок `{}` невалиден", block.id);
            assert_eq!(block.colour_hue, BRUSH_HUE);
        }
    }

    #[test]
    fn getters_produce_typed_outputs() {
        assert_eq!(brush_position().output_type(), Some(ValueType::Boolean));
        assert_eq!(brush_get_color().output_type(), Some(ValueType::Colour));
        assert!(brush_down().output_type().is_none());
    }
}
