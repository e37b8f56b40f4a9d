pub mod content_factory;
pub mod settings_factory;

pub use content_factory::ContentFactory;
pub use settings_factory::SettingsFactory;

#[cfg(test)]
mod content_factory_test;
