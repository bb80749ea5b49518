mod anthropic_source;
