pub mod dashboard_server;
