mod http_user_gateway;

pub use http_user_gateway::HttpUserGateway;
