//! `RouteMap`: shortest drive over a weighted directed road network.
//!
//! Complements the sliding-tile world with non-unit step costs and goals that
//! may be unreachable. Each place carries a caller-supplied estimate of the
//! remaining distance to the destination, which serves as the heuristic.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;

/// Malformed road network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteMapError {
    /// A road, start or destination names a place that was not declared.
    #[error("unknown place `{name}`")]
    UnknownPlace { name: String },
    /// The same place was declared twice.
    #[error("place `{name}` declared more than once")]
    DuplicatePlace { name: String },
}

/// A declared place with its estimated distance to the destination.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSpec {
    pub name: String,
    #[serde(default)]
    pub estimate: Cost,
}

/// A one-way road.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadSpec {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

/// Serializable description of a road network and a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteMapSpec {
    pub places: Vec<PlaceSpec>,
    pub roads: Vec<RoadSpec>,
    pub start: String,
    pub destination: String,
}

/// Drive along one road to the place at index `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    pub to: usize,
    pub to_name: String,
    pub cost: Cost,
}

impl Action for Drive {
    type State = usize;

    fn cost(&self) -> Cost {
        self.cost
    }

    fn enact(&self, _state: &usize) -> usize {
        self.to
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drive to {} ({})", self.to_name, self.cost)
    }
}

/// A validated road network; states are place indices.
#[derive(Debug, Clone)]
pub struct RouteMap {
    names: Vec<String>,
    estimates: Vec<Cost>,
    roads: Vec<Vec<Drive>>,
    start: usize,
    destination: usize,
}

impl RouteMap {
    /// Validate and index a [`RouteMapSpec`].
    ///
    /// Roads out of each place keep their declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteMapError`] for duplicate or undeclared places.
    pub fn new(spec: &RouteMapSpec) -> Result<Self, RouteMapError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, place) in spec.places.iter().enumerate() {
            if index.insert(place.name.as_str(), i).is_some() {
                return Err(RouteMapError::DuplicatePlace {
                    name: place.name.clone(),
                });
            }
        }
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| RouteMapError::UnknownPlace {
                    name: name.to_string(),
                })
        };

        let mut roads = vec![Vec::new(); spec.places.len()];
        for road in &spec.roads {
            let from = lookup(&road.from)?;
            let to = lookup(&road.to)?;
            roads[from].push(Drive {
                to,
                to_name: road.to.clone(),
                cost: road.cost,
            });
        }

        Ok(Self {
            names: spec.places.iter().map(|p| p.name.clone()).collect(),
            estimates: spec.places.iter().map(|p| p.estimate).collect(),
            roads,
            start: lookup(&spec.start)?,
            destination: lookup(&spec.destination)?,
        })
    }

    /// Parse a JSON [`RouteMapSpec`] and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the network is invalid.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let spec: RouteMapSpec = serde_json::from_str(json)?;
        Ok(Self::new(&spec)?)
    }

    /// Name of the place at `index`.
    #[must_use]
    pub fn place_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of places.
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.names.len()
    }
}

impl Problem for RouteMap {
    type State = usize;
    type Action = Drive;

    fn initial_state(&self) -> &usize {
        &self.start
    }

    fn actions(&self, state: &usize) -> Vec<Drive> {
        self.roads.get(*state).cloned().unwrap_or_default()
    }

    fn is_terminal(&self, state: &usize) -> bool {
        *state == self.destination
    }

    fn heuristic(&self, state: &usize) -> Cost {
        self.estimates.get(*state).copied().unwrap_or(0)
    }
}
