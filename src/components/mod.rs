pub mod lineage_chart;
