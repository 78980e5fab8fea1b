use atk_config::AtkConfig;
use atk_core::enums::UnresolvedTypePolicy;
use atk_package::Converter;
use atk_types::TypeRegistry;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AtkConfig,
    pub registry: TypeRegistry,
}

impl AppContext {
    pub fn init(config: AtkConfig) -> Self {
        warn_unconfigured(&config);
        Self {
            config,
            registry: TypeRegistry::builtin(),
        }
    }

    /// Context for commands that only consult the type registry.
    pub fn registry_only() -> Self {
        Self {
            config: AtkConfig::default(),
            registry: TypeRegistry::builtin(),
        }
    }

    /// Wire converter using `policy`, or the configured policy when `None`.
    pub fn converter(&self, policy: Option<UnresolvedTypePolicy>) -> Converter<'_> {
        Converter::new(
            &self.registry,
            policy.unwrap_or(self.config.sync.unresolved_types),
        )
    }
}

fn warn_unconfigured(config: &AtkConfig) {
    if !config.lms.is_configured() {
        tracing::debug!("LMS endpoint not configured; sync and auth are unavailable");
    }
    if config.author.name == AtkConfig::default().author.name {
        tracing::debug!("author name not configured; new packages use the default author");
    }
}
