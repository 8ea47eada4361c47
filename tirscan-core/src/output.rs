use std::io::Write;

use crate::clusters::RankedCluster;
use crate::config::OutputFormat;
use crate::results::LeaderReport;
use crate::types::TirError;

/// Write leader analysis reports in the requested format
pub fn write_leader_reports<W: Write>(
    writer: &mut W,
    reports: &[LeaderReport],
    format: OutputFormat,
) -> Result<(), TirError> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                if let Some(identifier) = &report.identifier {
                    writeln!(writer, ">{identifier}")?;
                }
                writeln!(writer, "upstream          {}", report.decomposition.upstream)?;
                writeln!(writer, "core              {}", report.decomposition.core)?;
                writeln!(writer, "spacer            {}", report.decomposition.spacer)?;
                writeln!(writer, "expression        {:.4}", report.decomposition.expression)?;
                writeln!(writer, "basic expression  {:.4}", report.basic_expression)?;
                writeln!(writer, "clusters          {}", cluster_names(report))?;
            }
        }
        OutputFormat::Tsv => {
            writeln!(
                writer,
                "identifier\tupstream\tcore\tspacer\texpression\tbasic_expression\tclusters"
            )?;
            for report in reports {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{}",
                    report.identifier.as_deref().unwrap_or("-"),
                    report.decomposition.upstream,
                    report.decomposition.core,
                    report.decomposition.spacer,
                    report.decomposition.expression,
                    report.basic_expression,
                    cluster_names(report)
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)
                .map_err(|e| TirError::ParseError(e.to_string()))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Write the inverse-direction cluster ranking in the requested format
pub fn write_cluster_ranking<W: Write>(
    writer: &mut W,
    ranked: &[RankedCluster],
    format: OutputFormat,
) -> Result<(), TirError> {
    match format {
        OutputFormat::Text => {
            if ranked.is_empty() {
                writeln!(writer, "No clusters matched.")?;
            }
            for (rank, entry) in ranked.iter().enumerate() {
                writeln!(
                    writer,
                    "{}. {}  distance {:.4}  mean {:.4}  std {:.4}",
                    rank + 1,
                    entry.cluster.name,
                    entry.distance,
                    entry.cluster.expression_mean,
                    entry.cluster.expression_std
                )?;
            }
        }
        OutputFormat::Tsv => {
            writeln!(writer, "rank\tcluster\tdistance\tmean\tstd\tmotifs")?;
            for (rank, entry) in ranked.iter().enumerate() {
                writeln!(
                    writer,
                    "{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{}",
                    rank + 1,
                    entry.cluster.name,
                    entry.distance,
                    entry.cluster.expression_mean,
                    entry.cluster.expression_std,
                    entry.cluster.motifs.join(",")
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, ranked)
                .map_err(|e| TirError::ParseError(e.to_string()))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn cluster_names(report: &LeaderReport) -> String {
    if report.clusters.is_empty() {
        "none".to_string()
    } else {
        report
            .clusters
            .iter()
            .map(|cluster| cluster.name.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clusters::Cluster;
    use crate::types::LeaderDecomposition;

    fn sample_report() -> LeaderReport {
        LeaderReport {
            identifier: Some("a".to_string()),
            decomposition: LeaderDecomposition {
                upstream: "TTTTTT".to_string(),
                core: "AAGGAG".to_string(),
                spacer: "TT".to_string(),
                expression: 0.049,
            },
            basic_expression: 1.5,
            clusters: vec![Cluster::new("c1".to_string(), ["AAGGAG"], 1.8, 0.5)],
        }
    }

    fn sample_ranking() -> Vec<RankedCluster> {
        vec![RankedCluster {
            cluster: Cluster::new("c1".to_string(), ["AAGGAG"], 1.8, 0.5),
            distance: 0.4,
        }]
    }

    #[test]
    fn test_text_report_contains_all_parts() {
        let mut buffer = Vec::new();
        write_leader_reports(&mut buffer, &[sample_report()], OutputFormat::Text).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains(">a"));
        assert!(text.contains("core              AAGGAG"));
        assert!(text.contains("expression        0.0490"));
        assert!(text.contains("clusters          c1"));
    }

    #[test]
    fn test_tsv_report_has_header_and_row() {
        let mut buffer = Vec::new();
        write_leader_reports(&mut buffer, &[sample_report()], OutputFormat::Tsv).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("identifier\tupstream"));
        assert_eq!(
            lines.next().unwrap(),
            "a\tTTTTTT\tAAGGAG\tTT\t0.0490\t1.5000\tc1"
        );
    }

    #[test]
    fn test_json_report_round_trips() {
        let mut buffer = Vec::new();
        write_leader_reports(&mut buffer, &[sample_report()], OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0]["decomposition"]["core"], "AAGGAG");
        assert_eq!(parsed[0]["clusters"][0]["name"], "c1");
    }

    #[test]
    fn test_empty_ranking_text() {
        let mut buffer = Vec::new();
        write_cluster_ranking(&mut buffer, &[], OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "No clusters matched.\n");
    }

    #[test]
    fn test_ranking_tsv_row() {
        let mut buffer = Vec::new();
        write_cluster_ranking(&mut buffer, &sample_ranking(), OutputFormat::Tsv).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("rank\tcluster"));
        assert!(text.contains("1\tc1\t0.4000\t1.8000\t0.5000\tAAGGAG"));
    }
}
