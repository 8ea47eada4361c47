use crate::clusters::{ClusterTable, RankedCluster};
use crate::config::PredictorConfig;
use crate::expression::ExpressionTable;
use crate::results::LeaderReport;
use crate::sequence::read_leader_sequences;
use crate::spacing::predict_spacing;
use crate::types::{LeaderDecomposition, TirError};

/// Main analysis engine tying the expression table, the optional cluster
/// statistics, and the predictor configuration together.
///
/// The tables are loaded once, injected here, and never mutated again, so
/// an analyzer can be shared freely across callers.
///
/// # Examples
///
/// ```rust,no_run
/// use tirscan_core::TirAnalyzer;
/// use tirscan_core::clusters::ClusterTable;
/// use tirscan_core::config::PredictorConfig;
/// use tirscan_core::expression::ExpressionTable;
///
/// let table = ExpressionTable::from_json_file("emopec_data.json")?;
/// let clusters = ClusterTable::from_csv_file("clusters_with_stats.csv")?;
/// let analyzer = TirAnalyzer::new(table, PredictorConfig::default()).with_clusters(clusters);
///
/// let report = analyzer.analyze_leader("TTTTTTAAGGAGTT", None)?;
/// println!("{} clusters contain {}", report.clusters.len(), report.decomposition.core);
/// # Ok::<(), tirscan_core::types::TirError>(())
/// ```
#[derive(Debug)]
pub struct TirAnalyzer {
    /// Predictor configuration
    pub config: PredictorConfig,
    expression_table: ExpressionTable,
    cluster_table: Option<ClusterTable>,
}

impl TirAnalyzer {
    /// Create an analyzer over an expression table
    #[must_use]
    pub fn new(expression_table: ExpressionTable, config: PredictorConfig) -> Self {
        Self {
            config,
            expression_table,
            cluster_table: None,
        }
    }

    /// Attach precomputed cluster statistics
    #[must_use]
    pub fn with_clusters(mut self, cluster_table: ClusterTable) -> Self {
        self.cluster_table = Some(cluster_table);
        self
    }

    /// The injected expression table
    #[must_use]
    pub fn expression_table(&self) -> &ExpressionTable {
        &self.expression_table
    }

    /// Locate the best-scoring ribosome binding site in a leader.
    ///
    /// See [`predict_spacing`](crate::spacing::predict_spacing).
    ///
    /// # Errors
    ///
    /// Propagates the predictor's validation errors.
    pub fn predict_spacing(&self, leader: &str) -> Result<LeaderDecomposition, TirError> {
        predict_spacing(leader, &self.expression_table, &self.config)
    }

    /// Analyze a leader: decomposition, basic expression of the winning
    /// core, and the clusters that core belongs to.
    ///
    /// # Errors
    ///
    /// Propagates the predictor's validation errors.
    pub fn analyze_leader(
        &self,
        leader: &str,
        identifier: Option<String>,
    ) -> Result<LeaderReport, TirError> {
        let decomposition = self.predict_spacing(leader)?;
        let basic_expression = self.expression_table.lookup(&decomposition.core);
        let clusters = self
            .cluster_table
            .as_ref()
            .map(|table| {
                table
                    .clusters_with_motif(&decomposition.core)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(LeaderReport {
            identifier,
            decomposition,
            basic_expression,
            clusters,
        })
    }

    /// Analyze every leader sequence in a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns the first I/O, parse, or validation error encountered.
    pub fn analyze_fasta_file(&self, filename: &str) -> Result<Vec<LeaderReport>, TirError> {
        read_leader_sequences(filename)?
            .into_iter()
            .map(|(id, _description, sequence)| self.analyze_leader(&sequence, Some(id)))
            .collect()
    }

    /// Inverse direction: clusters whose expression range covers the
    /// target, ranked by normalized distance. Empty when no cluster
    /// statistics are attached.
    #[must_use]
    pub fn clusters_for_expression(&self, target: f64) -> Vec<RankedCluster> {
        self.cluster_table
            .as_ref()
            .map(|table| table.clusters_covering(target))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clusters::Cluster;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_analyzer() -> TirAnalyzer {
        let table = ExpressionTable::from_entries([
            ("AAGGAG".to_string(), 1.5),
            ("AGGAGG".to_string(), 2.9),
        ])
        .unwrap();
        let clusters = ClusterTable::from_clusters(vec![
            Cluster::new("c1".to_string(), ["AAGGAG", "AGGAGG"], 1.8, 0.5),
            Cluster::new("c2".to_string(), ["AGCTAG"], 2.5, 0.6),
        ]);
        TirAnalyzer::new(table, PredictorConfig::default()).with_clusters(clusters)
    }

    #[test]
    fn test_analyze_leader_reports_core_and_clusters() {
        let analyzer = sample_analyzer();
        let report = analyzer.analyze_leader("TTTTTTAAGGAGTT", None).unwrap();

        assert_eq!(report.decomposition.core, "AAGGAG");
        assert_eq!(report.basic_expression, 1.5);
        assert_eq!(report.clusters.len(), 1);
        assert_eq!(report.clusters[0].name, "c1");
    }

    #[test]
    fn test_analyze_leader_without_clusters() {
        let table = ExpressionTable::from_entries([("AAGGAG".to_string(), 1.5)]).unwrap();
        let analyzer = TirAnalyzer::new(table, PredictorConfig::default());

        let report = analyzer.analyze_leader("TTTTTTAAGGAGTT", None).unwrap();
        assert!(report.clusters.is_empty());
        assert_eq!(report.basic_expression, 1.5);
    }

    #[test]
    fn test_analyze_leader_unknown_core_has_zero_basic_expression() {
        let analyzer = sample_analyzer();
        let report = analyzer.analyze_leader("ACGTACGTACGTACGTACGT", None).unwrap();

        assert_eq!(report.basic_expression, 0.0);
        assert_eq!(report.decomposition.expression, 0.0);
        assert!(report.clusters.is_empty());
    }

    #[test]
    fn test_analyze_fasta_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">a\nTTTTTTAAGGAGTT\n>b\nTTTAGGAGGTAAGGAGTT\n").unwrap();

        let analyzer = sample_analyzer();
        let reports = analyzer
            .analyze_fasta_file(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].identifier.as_deref(), Some("a"));
        assert_eq!(reports[0].decomposition.core, "AAGGAG");
        assert_eq!(reports[1].identifier.as_deref(), Some("b"));
        assert_eq!(reports[1].decomposition.core, "AGGAGG");
    }

    #[test]
    fn test_clusters_for_expression_ranked() {
        let analyzer = sample_analyzer();
        let ranked = analyzer.clusters_for_expression(2.0);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].cluster.name, "c1");
        assert_eq!(ranked[1].cluster.name, "c2");
    }

    #[test]
    fn test_clusters_for_expression_without_table_is_empty() {
        let table = ExpressionTable::from_entries([("AAGGAG".to_string(), 1.5)]).unwrap();
        let analyzer = TirAnalyzer::new(table, PredictorConfig::default());

        assert!(analyzer.clusters_for_expression(2.0).is_empty());
    }
}
