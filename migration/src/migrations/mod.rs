pub mod m202608290001_create_metrics_samples;
