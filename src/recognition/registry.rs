use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{OverlayError, OverlayResult};
use crate::recognition::adapter::OcrAdapter;

/// Recognition adapters keyed by their name, with one of them active.
pub struct AdapterRegistry {
    adapters: HashMap<String, Arc<dyn OcrAdapter>>,
    active: String,
}

impl AdapterRegistry {
    pub fn new(active: String) -> Self {
        Self {
            adapters: HashMap::new(),
            active,
        }
    }

    /// Empty registry whose active name comes from `[ocr] active_adapter`.
    /// Adapters are registered afterwards by the host application.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.ocr.active_adapter.clone())
    }

    pub fn register(&mut self, adapter: Arc<dyn OcrAdapter>) {
        tracing::debug!(adapter = adapter.name(), "recognition adapter registered");
        self.adapters.insert(adapter.name().to_string(), adapter);
    }

    pub fn get_active(&self) -> OverlayResult<Arc<dyn OcrAdapter>> {
        self.adapters.get(&self.active).cloned().ok_or_else(|| {
            OverlayError::Config(format!(
                "Active adapter '{}' not found in registry",
                self.active
            ))
        })
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn set_active(&mut self, name: String) -> OverlayResult<()> {
        if self.adapters.contains_key(&name) {
            self.active = name;
            Ok(())
        } else {
            Err(OverlayError::Config(format!("Adapter '{name}' not registered")))
        }
    }

    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr_result::RawRecognitionResult;
    use crate::recognition::adapter::RecognitionRequest;
    use async_trait::async_trait;

    struct Named(&'static str);

    #[async_trait]
    impl OcrAdapter for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn recognize(&self, _request: RecognitionRequest) -> OverlayResult<RawRecognitionResult> {
            Err(OverlayError::Recognition("not used".into()))
        }
    }

    #[test]
    fn active_name_comes_from_config() {
        let config = crate::config::parse_config("[ocr]\nactive_adapter = \"x\"").unwrap();
        let mut registry = AdapterRegistry::from_config(&config);
        assert_eq!(registry.active_name(), "x");
        assert!(registry.get_active().is_err());

        registry.register(Arc::new(Named("x")));
        assert_eq!(registry.get_active().unwrap().name(), "x");
    }

    #[test]
    fn active_adapter_must_be_registered() {
        let mut registry = AdapterRegistry::new("ppocr".into());
        assert!(registry.get_active().is_err());

        registry.register(Arc::new(Named("ppocr")));
        registry.register(Arc::new(Named("cloud")));
        assert_eq!(registry.get_active().unwrap().name(), "ppocr");
        assert_eq!(registry.list_names(), ["cloud", "ppocr"]);

        registry.set_active("cloud".into()).unwrap();
        assert_eq!(registry.active_name(), "cloud");
        assert!(registry.set_active("missing".into()).is_err());
        assert_eq!(registry.active_name(), "cloud");
    }
}
