mod health_test;
mod metrics_test;
