//! Minimal OpenAPI document builder.
//!
//! Application metadata introspection lives elsewhere; this builder only
//! assembles the document skeleton (info, servers, tags) and accepts paths
//! produced by whatever generator the application uses.

use serde_json::map::Entry;
use serde_json::{json, Map, Value};

use crate::document::model::Document;

/// Fluent builder for an OpenAPI 3 document skeleton.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    title: String,
    description: String,
    version: String,
    servers: Vec<Value>,
    tags: Vec<Value>,
    paths: Map<String, Value>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            version: "1.0.0".to_string(),
            servers: Vec::new(),
            tags: Vec::new(),
            paths: Map::new(),
        }
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn server(mut self, url: impl Into<String>, description: Option<&str>) -> Self {
        let mut server = json!({ "url": url.into() });
        if let Some(description) = description {
            server["description"] = Value::from(description);
        }
        self.servers.push(server);
        self
    }

    pub fn tag(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.tags
            .push(json!({ "name": name.into(), "description": description.into() }));
        self
    }

    /// Merge path items. Later operations on the same path and method win.
    pub fn merge_paths(mut self, paths: Map<String, Value>) -> Self {
        for (path, item) in paths {
            match self.paths.entry(path) {
                Entry::Occupied(mut slot) => match (slot.get_mut(), item) {
                    (Value::Object(existing), Value::Object(operations)) => {
                        existing.extend(operations);
                    }
                    (existing, item) => *existing = item,
                },
                Entry::Vacant(slot) => {
                    slot.insert(item);
                }
            }
        }
        self
    }

    pub fn build(self) -> Document {
        Document::new(json!({
            "openapi": "3.0.0",
            "info": {
                "title": self.title,
                "description": self.description,
                "version": self.version,
                "contact": {}
            },
            "tags": self.tags,
            "servers": self.servers,
            "paths": self.paths,
            "components": { "schemas": {} }
        }))
    }
}
