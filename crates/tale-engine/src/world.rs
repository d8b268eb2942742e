//! The world graph: locations and the directed connections between them.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tale_core::LocationId;
use tracing::debug;

use crate::action::Action;
use crate::error::{EngineError, EngineResult};

/// A directed edge from one location to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Direction keyword the player types, lower case.
    pub direction: String,
    /// Where the edge leads.
    pub destination: LocationId,
}

/// A place in the story.
///
/// Direction and action labels are stored lower case so they match the
/// case-folded command token.
#[derive(Clone)]
pub struct Location {
    /// Unique key in the world graph.
    pub id: LocationId,
    /// Display name, used as the screen title.
    pub name: String,
    /// Description shown on arrival.
    pub description: String,
    connections: Vec<Connection>,
    actions: Vec<(String, Rc<dyn Action>)>,
}

impl Location {
    /// Create a location with no exits and no actions.
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            connections: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add (or replace) the exit in `direction`.
    pub fn connect(mut self, direction: &str, destination: impl Into<LocationId>) -> Self {
        let direction = direction.trim().to_lowercase();
        let destination = destination.into();
        match self
            .connections
            .iter_mut()
            .find(|c| c.direction == direction)
        {
            Some(existing) => existing.destination = destination,
            None => self.connections.push(Connection {
                direction,
                destination,
            }),
        }
        self
    }

    /// Bind (or rebind) an action handler under `name`.
    pub fn action(mut self, name: &str, handler: impl Action + 'static) -> Self {
        let name = name.trim().to_lowercase();
        let handler: Rc<dyn Action> = Rc::new(handler);
        match self.actions.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = handler,
            None => self.actions.push((name, handler)),
        }
        self
    }

    /// Exits in the order they were added.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Destination of the exit labelled `direction`, ignoring case.
    pub fn destination(&self, direction: &str) -> Option<&LocationId> {
        let direction = direction.to_lowercase();
        self.connections
            .iter()
            .find(|c| c.direction == direction)
            .map(|c| &c.destination)
    }

    /// Action names in the order they were bound.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|(name, _)| name.as_str())
    }

    /// Handler bound to `name`, ignoring case.
    pub fn handler(&self, name: &str) -> Option<Rc<dyn Action>> {
        let name = name.to_lowercase();
        self.actions
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, handler)| Rc::clone(handler))
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("connections", &self.connections)
            .field("actions", &self.action_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// A connection whose destination is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingConnection {
    /// Location the edge starts from.
    pub from: LocationId,
    /// Direction keyword of the edge.
    pub direction: String,
    /// The missing destination.
    pub to: LocationId,
}

/// All locations of a story, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct WorldGraph {
    locations: HashMap<LocationId, Location>,
}

impl WorldGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location. A location already registered under the same id is
    /// replaced.
    pub fn register(&mut self, location: Location) {
        let id = location.id.clone();
        if self.locations.insert(id.clone(), location).is_some() {
            debug!(%id, "location re-registered, replacing previous definition");
        }
    }

    /// Look up a location.
    pub fn resolve(&self, id: &LocationId) -> EngineResult<&Location> {
        self.locations
            .get(id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no location is registered.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over all locations in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Connections that lead to unregistered locations, sorted by origin.
    pub fn dangling_connections(&self) -> Vec<DanglingConnection> {
        let mut dangling: Vec<DanglingConnection> = self
            .locations
            .values()
            .flat_map(|loc| {
                loc.connections
                    .iter()
                    .filter(|c| !self.locations.contains_key(&c.destination))
                    .map(|c| DanglingConnection {
                        from: loc.id.clone(),
                        direction: c.direction.clone(),
                        to: c.destination.clone(),
                    })
            })
            .collect();
        dangling.sort_by(|a, b| (&a.from, &a.direction).cmp(&(&b.from, &b.direction)));
        dangling
    }
}
