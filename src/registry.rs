use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::brush;
use crate::descriptor::{BlockDescriptor, DescriptorError};

/// Ошибки реестра дескрипторов.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Блок с таким идентификатором уже зарегистрирован.
    DuplicateId(String),
    /// Блок с таким идентификатором не зарегистрирован.
    NotFound(String),
    /// Дескриптор не прошёл проверку формы.
    Invalid(DescriptorError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId(id) => write!(f, "block `{id}` is already registered"),
            RegistryError::NotFound(id) => write!(f, "block `{id}` is not registered"),
            RegistryError::Invalid(e) => write!(f, "invalid descriptor: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DescriptorError> for RegistryError {
    fn from(e: DescriptorError) -> Self {
        RegistryError::Invalid(e)
    }
}

/// Реестр дескрипторов блоков.
///
/// Хранит отображение идентификатора в дескриптор и порядок регистрации:
/// палитра редактора показывает блоки в том порядке, в котором они были
/// зарегистрированы. Политика дубликатов строгая: повторная регистрация
/// идентификатора завершается [`RegistryError::DuplicateId`], первый
/// дескриптор остаётся в силе.
///
/// Реестр заполняется при старте и далее только читается, поэтому после
/// инициализации его можно разделять между потоками без блокировок.
#[derive(Debug, Default, Clone)]
pub struct BlockRegistry {
    blocks: HashMap<String, BlockDescriptor>,
    order: Vec<String>,
}

impl BlockRegistry {
    /// Создаёт пустой реестр.
    pub fn new() -> Self {
        Self::default()
    }

    /// Реестр со встроенными блоками кисти в порядке палитры.
    pub fn with_builtins() -> Self {
        Self::from_descriptors(brush::all()).expect("builtin brush blocks must register")
    }

    /// Собирает реестр из последовательности дескрипторов.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = BlockDescriptor>,
    {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Регистрирует дескриптор, проверяя форму и уникальность идентификатора.
    pub fn register(&mut self, descriptor: BlockDescriptor) -> Result<(), RegistryError> {
        descriptor.validate()?;
        if self.blocks.contains_key(&descriptor.id) {
            warn!("повторная регистрация блока `{}`", descriptor.id);
            return Err(RegistryError::DuplicateId(descriptor.id));
        }
        debug!("зарегистрирован блок `{}`", descriptor.id);
        self.order.push(descriptor.id.clone());
        self.blocks.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }

    /// Возвращает дескриптор по идентификатору.
    pub fn lookup(&self, id: &str) -> Result<&BlockDescriptor, RegistryError> {
        self.blocks
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Возвращает дескриптор по идентификатору, если он есть.
    pub fn get(&self, id: &str) -> Option<&BlockDescriptor> {
        self.blocks.get(id)
    }

    /// Зарегистрирован ли идентификатор.
    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    /// Число зарегистрированных блоков.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Пуст ли реестр.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Обходит дескрипторы в порядке регистрации.
    pub fn iter(&self) -> impl Iterator<Item = &BlockDescriptor> {
        self.order.iter().filter_map(move |id| self.blocks.get(id))
    }
}
