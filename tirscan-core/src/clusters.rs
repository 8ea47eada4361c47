use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::sequence::normalize_sequence;
use crate::types::TirError;

/// Raw CSV row using the column names of the original statistics export
#[derive(Debug, Deserialize)]
struct ClusterRow {
    #[serde(rename = "cluster")]
    name: String,
    #[serde(rename = "SEQ_unique")]
    motifs: String,
    #[serde(rename = "CORE REL EXPR mean")]
    expression_mean: f64,
    #[serde(rename = "CORE REL EXPR std")]
    expression_std: f64,
}

/// A cluster of known core motifs with its expression statistics.
///
/// Clusters are precomputed elsewhere; this layer only answers membership
/// and range queries against them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Cluster identifier
    pub name: String,
    /// Member core motifs, normalized and sorted
    pub motifs: Vec<String>,
    /// Mean relative expression of the cluster members
    pub expression_mean: f64,
    /// Standard deviation of the members' relative expression
    pub expression_std: f64,
}

impl Cluster {
    /// Create a cluster, normalizing and sorting its member motifs
    pub fn new<I, S>(name: String, motifs: I, expression_mean: f64, expression_std: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut motifs: Vec<String> = motifs
            .into_iter()
            .map(|motif| normalize_sequence(motif.as_ref().trim()))
            .collect();
        motifs.sort();
        Self {
            name,
            motifs,
            expression_mean,
            expression_std,
        }
    }

    /// Membership test against the sorted motif list
    #[must_use]
    pub fn contains_motif(&self, motif: &str) -> bool {
        self.motifs.binary_search(&normalize_sequence(motif)).is_ok()
    }

    /// Whether `mean ± std` covers the target expression value
    #[must_use]
    pub fn covers(&self, target: f64) -> bool {
        self.expression_mean - self.expression_std <= target
            && target <= self.expression_mean + self.expression_std
    }
}

/// A cluster ranked by normalized distance from a target expression value
#[derive(Debug, Clone, Serialize)]
pub struct RankedCluster {
    /// The matching cluster
    pub cluster: Cluster,
    /// `|mean - target| / std`; zero for an exact hit on a zero-spread
    /// cluster
    pub distance: f64,
}

/// Precomputed clustering of known core motifs with per-cluster statistics.
///
/// Immutable after load, like the expression table.
#[derive(Debug, Clone, Default)]
pub struct ClusterTable {
    clusters: Vec<Cluster>,
}

impl ClusterTable {
    /// Load cluster statistics from CSV.
    ///
    /// Expects the original export's columns: `cluster`, `SEQ_unique`
    /// (comma-joined motif list), `CORE REL EXPR mean`,
    /// `CORE REL EXPR std`.
    ///
    /// # Errors
    ///
    /// Returns [`TirError::ParseError`] for unreadable or malformed CSV.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, TirError> {
        let mut reader =
            csv::Reader::from_path(path.as_ref()).map_err(|e| TirError::ParseError(e.to_string()))?;

        let mut clusters = Vec::new();
        for row in reader.deserialize() {
            let row: ClusterRow = row.map_err(|e| TirError::ParseError(e.to_string()))?;
            clusters.push(Cluster::new(
                row.name,
                row.motifs.split(','),
                row.expression_mean,
                row.expression_std,
            ));
        }

        info!("loaded {} clusters", clusters.len());
        Ok(Self { clusters })
    }

    /// Build a table from already-constructed clusters
    #[must_use]
    pub fn from_clusters(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    /// Clusters whose motif set contains the given core motif
    #[must_use]
    pub fn clusters_with_motif(&self, motif: &str) -> Vec<&Cluster> {
        let motif = normalize_sequence(motif);
        self.clusters
            .iter()
            .filter(|cluster| cluster.motifs.binary_search(&motif).is_ok())
            .collect()
    }

    /// Clusters whose `mean ± std` range covers the target value, ranked
    /// ascending by normalized distance `|mean - target| / std`.
    ///
    /// A zero-spread cluster collapses to the point `mean`: it matches
    /// only on an exact hit and ranks at distance zero.
    #[must_use]
    pub fn clusters_covering(&self, target: f64) -> Vec<RankedCluster> {
        let mut ranked: Vec<RankedCluster> = self
            .clusters
            .iter()
            .filter(|cluster| cluster.covers(target))
            .map(|cluster| RankedCluster {
                distance: if cluster.expression_std == 0.0 {
                    0.0
                } else {
                    (cluster.expression_mean - target).abs() / cluster.expression_std
                },
                cluster: cluster.clone(),
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }

    /// Number of clusters in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the table holds no clusters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterate over the clusters in load order
    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }
}

/// Parse a user-supplied expression target value.
///
/// Malformed input is "no result", never an error: the inverse query
/// degrades to an empty response.
#[must_use]
pub fn parse_expression_target(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}
