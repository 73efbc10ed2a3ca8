mod session_config;
