use crate::config::{PredictorConfig, SpacingParameters};
use crate::constants::{CORE_END_OFFSET, CORE_LENGTH, EXPRESSION_ROUNDING_FACTOR, MIN_LEADER_LENGTH};
use crate::expression::ExpressionTable;
use crate::sequence::normalize_sequence;
use crate::types::{LeaderDecomposition, TirError};

/// Empirical penalty for a spacer distance away from the optimum.
///
/// Zero exactly at the optimal spacing. Below it the penalty rises along a
/// steep logistic curve (the ribosome footprint clashes with the coding
/// sequence); above it a shallow quadratic takes over (binding degrades
/// smoothly with distance). The two branches both approach zero near the
/// optimum but are not required to agree off the boundary.
#[must_use]
pub fn spacing_penalty(spacing: i32, parameters: &SpacingParameters) -> f64 {
    let distance = f64::from(spacing - parameters.optimal_spacing);
    if distance == 0.0 {
        0.0
    } else if distance < 0.0 {
        let [amplitude, steepness, midpoint, exponent] = parameters.push;
        amplitude / (1.0 + (steepness * (distance + midpoint)).exp()).powf(exponent)
    } else {
        let [quadratic, linear, constant] = parameters.pull;
        quadratic * distance * distance + linear * distance + constant
    }
}

/// Locate the best-scoring ribosome binding site in a leader sequence.
///
/// The leader is normalized (uppercased, `U` → `T`) and every candidate
/// spacer offset in `0..max_spacing` is scored: the 6-base window ending
/// `1 + offset` bases before the end of the leader is looked up in the
/// expression table and, when present, scored as
/// `10^(table value - penalty(offset) * weight)`. Windows absent from the
/// table score zero. The strictly-greatest score wins; ties keep the
/// smallest offset.
///
/// Offsets whose window would run past the start of the leader are not
/// scanned, so leaders shorter than `6 + max_spacing` bases restrict the
/// scan rather than fail. A leader without room for a single window is an
/// error.
///
/// # Errors
///
/// Returns [`TirError::InvalidMaxSpacing`] when `max_spacing` is zero,
/// [`TirError::InvalidSequence`] for non-ASCII input, and
/// [`TirError::LeaderTooShort`] when the leader is under 7 bases.
pub fn predict_spacing(
    leader: &str,
    table: &ExpressionTable,
    config: &PredictorConfig,
) -> Result<LeaderDecomposition, TirError> {
    if config.max_spacing == 0 {
        return Err(TirError::InvalidMaxSpacing);
    }
    if !leader.is_ascii() {
        return Err(TirError::InvalidSequence(
            "leader contains non-ASCII characters".to_string(),
        ));
    }

    let normalized = normalize_sequence(leader);
    let length = normalized.len();
    if length < MIN_LEADER_LENGTH {
        return Err(TirError::LeaderTooShort {
            length,
            required: MIN_LEADER_LENGTH,
        });
    }

    // Offsets at or past this bound would run the window off the start.
    let scan_limit = config.max_spacing.min(length - CORE_LENGTH);

    let mut best_expression = 0.0;
    let mut best_offset = 0;

    for offset in 0..scan_limit {
        let core_end = length - CORE_END_OFFSET - offset;
        let core = &normalized[core_end - CORE_LENGTH..core_end];

        let Some(log_expression) = table.get(core) else {
            continue;
        };
        let penalty = spacing_penalty(offset as i32, &config.spacing);
        let expression = 10f64.powf(log_expression - penalty * config.spacing.penalty_weight);

        if expression > best_expression {
            best_expression = expression;
            best_offset = offset;
        }
    }

    let core_end = length - CORE_END_OFFSET - best_offset;
    let core_start = core_end - CORE_LENGTH;

    Ok(LeaderDecomposition {
        upstream: normalized[..core_start].to_string(),
        core: normalized[core_start..core_end].to_string(),
        spacer: normalized[core_end..].to_string(),
        expression: round_expression(best_expression),
    })
}

/// Round a predicted expression value to four decimal places
fn round_expression(value: f64) -> f64 {
    (value * EXPRESSION_ROUNDING_FACTOR).round() / EXPRESSION_ROUNDING_FACTOR
}
