use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Допустимая форма идентификатора блока.
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z][a-z0-9_]*$").expect("invalid id pattern"));

/// Semantic type carried by a value socket.
///
/// # Examples
/// ```
/// use brush_blocks::descriptor::ValueType;
/// let ty = ValueType::Boolean;
/// assert_ne!(ty, ValueType::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ValueType {
    Any,
    Boolean,
    Number,
    Text,
    /// Хост сериализует этот тип как `Color`; обе записи принимаются.
    #[serde(alias = "Color")]
    Colour,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Any
    }
}

/// Форма соединений блока.
///
/// Блок либо встраивается в вертикальную последовательность операторов,
/// либо выдаёт типизированное значение — третьего не дано, поэтому форма
/// выражена перечислением, а не парой флагов.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Shape {
    /// Оператор: есть коннекторы previous и next, значения не производит.
    Statement,
    /// Выражение: производит значение указанного типа.
    ValueOutput(ValueType),
}

/// Типизированный входной сокет на лицевой стороне блока.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct ValueInput {
    /// Имя сокета, по которому генератор кода находит значение.
    pub name: String,
    /// Тип, которым ограничены допустимые подключения.
    #[serde(default)]
    pub check: ValueType,
}

/// Декларативное описание одного типа визуального блока.
///
/// Значение создаётся один раз при старте и далее не изменяется; вся
/// "логика" блока живёт в хост-редакторе, который читает эти поля при
/// отрисовке и генерации кода.
///
/// # Examples
/// ```
/// use brush_blocks::descriptor::{BlockDescriptor, ValueType};
/// let block = BlockDescriptor::statement("brush_down", "brushDown")
///     .colour(330.0)
///     .tooltip("Brush down");
/// assert!(block.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct BlockDescriptor {
    /// Уникальный идентификатор типа блока, например `brush_down`.
    pub id: String,
    /// Оттенок (0–360), задающий цвет блока в палитре.
    pub colour_hue: f32,
    /// Надпись на лицевой стороне блока.
    pub label: String,
    /// Форма соединений: оператор или выражение.
    pub shape: Shape,
    /// Входные сокеты значений.
    #[serde(default)]
    pub inputs: Vec<ValueInput>,
    /// Отображать входы в одну строку с надписью.
    #[serde(default)]
    pub inline_inputs: bool,
    /// Подсказка, показываемая при наведении.
    #[serde(default)]
    pub tooltip: String,
}

/// Errors produced by [`BlockDescriptor::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// The id does not match `^[a-z][a-z0-9_]*$`.
    BadId(String),
    /// The colour hue lies outside `0.0..=360.0`.
    HueOutOfRange(f32),
    /// A value input has an empty name.
    EmptyInputName,
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::BadId(id) => write!(f, "malformed block id `{id}`"),
            DescriptorError::HueOutOfRange(hue) => write!(f, "colour hue {hue} out of range"),
            DescriptorError::EmptyInputName => write!(f, "value input with empty name"),
        }
    }
}

impl std::error::Error for DescriptorError {}

impl BlockDescriptor {
    /// Создаёт блок-оператор с коннекторами previous/next.
    pub fn statement(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            colour_hue: 0.0,
            label: label.to_string(),
            shape: Shape::Statement,
            inputs: Vec::new(),
            inline_inputs: false,
            tooltip: String::new(),
        }
    }

    /// Создаёт блок-выражение, производящее значение типа `output`.
    pub fn value_output(id: &str, label: &str, output: ValueType) -> Self {
        Self {
            shape: Shape::ValueOutput(output),
            ..Self::statement(id, label)
        }
    }

    /// Задаёт оттенок блока.
    pub fn colour(mut self, hue: f32) -> Self {
        self.colour_hue = hue;
        self
    }

    /// Задаёт текст подсказки.
    pub fn tooltip(mut self, text: &str) -> Self {
        self.tooltip = text.to_string();
        self
    }

    /// Добавляет входной сокет значения с ограничением по типу.
    pub fn value_input(mut self, name: &str, check: ValueType) -> Self {
        self.inputs.push(ValueInput {
            name: name.to_string(),
            check,
        });
        self
    }

    /// Переводит входы в строчное расположение.
    pub fn inline(mut self) -> Self {
        self.inline_inputs = true;
        self
    }

    /// Возвращает тип выхода, если блок является выражением.
    pub fn output_type(&self) -> Option<ValueType> {
        match self.shape {
            Shape::Statement => None,
            Shape::ValueOutput(ty) => Some(ty),
        }
    }

    /// Является ли блок оператором.
    pub fn is_statement(&self) -> bool {
        self.shape == Shape::Statement
    }

    /// Проверяет форму дескриптора.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if !ID_PATTERN.is_match(&self.id) {
            return Err(DescriptorError::BadId(self.id.clone()));
        }
        if !(0.0..=360.0).contains(&self.colour_hue) {
            return Err(DescriptorError::HueOutOfRange(self.colour_hue));
        }
        if self.inputs.iter().any(|i| i.name.is_empty()) {
            return Err(DescriptorError::EmptyInputName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_fields() {
        let block = BlockDescriptor::statement("brush_set_color", "setBrushColor")
            .colour(330.0)
            .value_input("VAL", ValueType::Colour)
            .inline()
            .tooltip("Change the brush color.");
        assert!(block.is_statement());
        assert_eq!(block.output_type(), None);
        assert_eq!(block.inputs.len(), 1);
        assert_eq!(block.inputs[0].check, ValueType::Colour);
        assert!(block.inline_inputs);
        assert!(block.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_id() {
        let block = BlockDescriptor::statement("Brush Down", "brushDown");
        assert_eq!(
            block.validate(),
            Err(DescriptorError::BadId("Brush Down".into()))
        );
    }

    #[test]
    fn rejects_hue_out_of_range() {
        let block = BlockDescriptor::statement("brush_down", "brushDown").colour(400.0);
        assert_eq!(block.validate(), Err(DescriptorError::HueOutOfRange(400.0)));
    }

    #[test]
    fn rejects_empty_input_name() {
        let block = BlockDescriptor::statement("brush_set_color", "setBrushColor")
            .value_input("", ValueType::Colour);
        assert_eq!(block.validate(), Err(DescriptorError::EmptyInputName));
    }

    #[test]
    fn accepts_color_spelling() {
        // палитры, записанные хостом, используют американское написание
        let json = "{\"name\":\"VAL\",\"check\":\"Color\"}";
        let input: ValueInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.check, ValueType::Colour);
    }

    #[test]
    fn missing_check_defaults_to_any() {
        let json = "{\"name\":\"VAL\"}";
        let input: ValueInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.check, ValueType::Any);
    }
}
