pub mod bedrock_request;
