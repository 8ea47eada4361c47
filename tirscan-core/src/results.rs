use serde::Serialize;

use crate::clusters::Cluster;
use crate::types::LeaderDecomposition;

/// Full analysis report for one leader sequence.
///
/// Combines the predictor's decomposition with the raw table value of the
/// winning core and the clusters that core belongs to.
///
/// # Examples
///
/// ```rust,no_run
/// use tirscan_core::TirAnalyzer;
/// use tirscan_core::config::PredictorConfig;
/// use tirscan_core::expression::ExpressionTable;
///
/// let table = ExpressionTable::from_json_file("emopec_data.json")?;
/// let analyzer = TirAnalyzer::new(table, PredictorConfig::default());
///
/// let report = analyzer.analyze_leader("TTTTTTAAGGAGTT", None)?;
/// println!("core {} expr {:.4}", report.decomposition.core, report.decomposition.expression);
/// # Ok::<(), tirscan_core::types::TirError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct LeaderReport {
    /// Identifier of the analyzed leader (FASTA id in batch mode)
    pub identifier: Option<String>,

    /// Winning decomposition of the leader
    pub decomposition: LeaderDecomposition,

    /// Raw log-scale table value of the winning core, without any spacing
    /// penalty applied (zero when the core is absent from the table)
    pub basic_expression: f64,

    /// Clusters whose motif set contains the winning core
    pub clusters: Vec<Cluster>,
}
