//! One-shot summary of a sample

use crate::config::SummaryConfig;
use sample_core::Numeric;
use sample_location::{hodges_lehmann, mean};
use sample_quantile::{median, quantiles};
use sample_spread::{
    central_moment, excess_kurtosis, gini_mean_difference, skewness, std_dev, variance,
};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Result of one estimator; failures keep their message
pub type Estimate = Result<f64, String>;

fn estimate<F: Into<f64>, E: fmt::Display>(result: Result<F, E>) -> Estimate {
    result.map(Into::into).map_err(|err| err.to_string())
}

/// A nearest-rank quantile at probability `p`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileEstimate {
    pub p: f64,
    pub value: Estimate,
}

/// A central moment of order `order`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentEstimate {
    pub order: u32,
    pub value: Estimate,
}

/// Every descriptive statistic of a sample
///
/// Each entry fails on its own; a sample of one observation still gets a
/// mean, a median and moments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: Estimate,
    pub variance: Estimate,
    pub std_dev: Estimate,
    pub gini_mean_difference: Estimate,
    pub hodges_lehmann: Estimate,
    pub median: Estimate,
    pub skewness: Estimate,
    pub excess_kurtosis: Estimate,
    pub quantiles: Vec<QuantileEstimate>,
    pub central_moments: Vec<MomentEstimate>,
}

impl Summary {
    /// Number of entries that failed
    pub fn failures(&self) -> usize {
        let scalars = [
            &self.mean,
            &self.variance,
            &self.std_dev,
            &self.gini_mean_difference,
            &self.hodges_lehmann,
            &self.median,
            &self.skewness,
            &self.excess_kurtosis,
        ];
        scalars.iter().filter(|e| e.is_err()).count()
            + self.quantiles.iter().filter(|q| q.value.is_err()).count()
            + self.central_moments.iter().filter(|m| m.value.is_err()).count()
    }
}

/// Compute every statistic `config` asks for
pub fn summarize<T: Numeric>(sample: &[T], config: &SummaryConfig) -> Summary {
    debug!(
        n = sample.len(),
        quantiles = config.quantiles.len(),
        moments = config.moment_orders.len(),
        "summarizing sample"
    );

    let quantile_rows = match quantiles(sample, &config.quantiles) {
        Ok(values) => config
            .quantiles
            .iter()
            .zip(values)
            .map(|(&p, value)| QuantileEstimate {
                p,
                value: Ok(value.into()),
            })
            .collect(),
        Err(err) => config
            .quantiles
            .iter()
            .map(|&p| QuantileEstimate {
                p,
                value: Err(err.to_string()),
            })
            .collect(),
    };

    let central_moments = config
        .moment_orders
        .iter()
        .map(|&order| MomentEstimate {
            order,
            value: estimate(central_moment(sample, order)),
        })
        .collect();

    Summary {
        count: sample.len(),
        mean: estimate(mean(sample)),
        variance: estimate(variance(sample)),
        std_dev: estimate(std_dev(sample)),
        gini_mean_difference: estimate(gini_mean_difference(sample)),
        hodges_lehmann: estimate(hodges_lehmann(sample)),
        median: estimate(median(sample)),
        skewness: estimate(skewness(sample)),
        excess_kurtosis: estimate(excess_kurtosis(sample)),
        quantiles: quantile_rows,
        central_moments,
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, value: &Estimate) -> fmt::Result {
    match value {
        Ok(v) => writeln!(f, "{label:<24} {v}"),
        Err(err) => writeln!(f, "{label:<24} error: {err}"),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24} {}", "count", self.count)?;
        write_row(f, "mean", &self.mean)?;
        write_row(f, "variance", &self.variance)?;
        write_row(f, "std dev", &self.std_dev)?;
        write_row(f, "gini mean difference", &self.gini_mean_difference)?;
        write_row(f, "hodges-lehmann", &self.hodges_lehmann)?;
        write_row(f, "median", &self.median)?;
        write_row(f, "skewness", &self.skewness)?;
        write_row(f, "excess kurtosis", &self.excess_kurtosis)?;
        for q in &self.quantiles {
            write_row(f, &format!("quantile({})", q.p), &q.value)?;
        }
        for m in &self.central_moments {
            write_row(f, &format!("central moment({})", m.order), &m.value)?;
        }
        Ok(())
    }
}
