//! Реестр дескрипторов визуальных блоков кисти.
//!
//! Крейт описывает блоки рисующей кисти для блочного редактора кода:
//! неизменяемые дескрипторы ([`BlockDescriptor`]), реестр с порядком
//! регистрации ([`BlockRegistry`]) и загрузку палитры из JSON. Отрисовку,
//! соединение блоков и генерацию кода выполняет хост-редактор; крейт лишь
//! снабжает его декларативными данными.

pub mod brush;
pub mod config;
pub mod descriptor;
pub mod palette;
pub mod registry;

pub use descriptor::{BlockDescriptor, DescriptorError, Shape, ValueInput, ValueType};
pub use registry::{BlockRegistry, RegistryError};
