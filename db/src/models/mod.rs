pub mod metrics_sample;

pub use metrics_sample::Entity as MetricsSample;
