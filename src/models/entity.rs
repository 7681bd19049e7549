//! Entity registry
//!
//! Every managed entity is described by one row of a static table: the REST
//! collection it lives under, the name used in notifications and the list page
//! the dashboard returns to after a save.

use std::fmt;
use std::str::FromStr;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Kinds of entities managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    User,
    Role,
    Banner,
    PromotionalBanner,
    Article,
    Faq,
}

/// Static description of an entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityConfig {
    pub kind: EntityKind,
    /// REST collection path, e.g. `/api/users`
    pub endpoint: &'static str,
    /// Human-readable name used in messages
    pub name: &'static str,
    /// Name used mid-sentence, e.g. "Failed to create promotional banner"
    pub noun: &'static str,
    /// Route of the list page shown after "save and exit"
    pub list_route: &'static str,
    /// Slug accepted on the command line
    pub slug: &'static str,
}

static ENTITY_CONFIGS: [EntityConfig; 6] = [
    EntityConfig {
        kind: EntityKind::User,
        endpoint: "/api/users",
        name: "User",
        noun: "user",
        list_route: "/users",
        slug: "user",
    },
    EntityConfig {
        kind: EntityKind::Role,
        endpoint: "/api/roles",
        name: "Role",
        noun: "role",
        list_route: "/roles",
        slug: "role",
    },
    EntityConfig {
        kind: EntityKind::Banner,
        endpoint: "/api/banners",
        name: "Banner",
        noun: "banner",
        list_route: "/website/banners",
        slug: "banner",
    },
    EntityConfig {
        kind: EntityKind::PromotionalBanner,
        endpoint: "/api/promotional-banners",
        name: "Promotional banner",
        noun: "promotional banner",
        list_route: "/website/promotional-banners",
        slug: "promotional-banner",
    },
    EntityConfig {
        kind: EntityKind::Article,
        endpoint: "/api/articles",
        name: "Article",
        noun: "article",
        list_route: "/website/articles",
        slug: "article",
    },
    EntityConfig {
        kind: EntityKind::Faq,
        endpoint: "/api/faqs",
        name: "FAQ",
        noun: "FAQ",
        list_route: "/website/faqs",
        slug: "faq",
    },
];

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::User,
        EntityKind::Role,
        EntityKind::Banner,
        EntityKind::PromotionalBanner,
        EntityKind::Article,
        EntityKind::Faq,
    ];

    /// Look up the static configuration for this kind
    pub fn config(self) -> &'static EntityConfig {
        // Table order matches declaration order of the enum
        &ENTITY_CONFIGS[self as usize]
    }

    pub fn endpoint(self) -> &'static str {
        self.config().endpoint
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    pub fn noun(self) -> &'static str {
        self.config().noun
    }

    pub fn list_route(self) -> &'static str {
        self.config().list_route
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ENTITY_CONFIGS
            .iter()
            .find(|config| config.slug == wanted)
            .map(|config| config.kind)
            .ok_or_else(|| {
                let known: Vec<&str> = ENTITY_CONFIGS.iter().map(|c| c.slug).collect();
                format!("Unknown entity kind: {}. Known kinds: {}", s, known.join(", "))
            })
    }
}

/// An entity that can be created, edited and listed from the dashboard.
///
/// `FormData` is the editable subset of the entity. It never contains the
/// identifier or the timestamps; those belong to the backend.
pub trait ManagedEntity: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    type FormData: Serialize + DeserializeOwned + Clone + Default + PartialEq + fmt::Debug + Send + Sync;

    const KIND: EntityKind;

    /// Backend-assigned identifier
    fn id(&self) -> &str;

    /// Human-readable label used in notifications
    fn label(&self) -> &str;

    /// Editable copy used to pre-populate an edit form
    fn to_form_data(&self) -> Self::FormData;

    fn config() -> &'static EntityConfig {
        Self::KIND.config()
    }
}
