//! End-to-end tests of the `OpenAI` client against a wiremock server

#[cfg(test)]
mod tests {
    use openai_wrapper::{
        ChatRequest, ImageRequest, Model, ModerationRequest, OpenAI, OpenAIRequestError,
        TransportError, UserMessage, MessageBuilder, models,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAI {
        OpenAI::builder()
            .api_key("test-api-key")
            .base_url(server.uri())
            .build()
    }

    #[tokio::test]
    async fn test_chat_completion_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_json(json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Hello, how are you?"}],
                "temperature": 1.0,
                "n": 1,
                "max_tokens": 16
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-123",
                "object": "chat.completion",
                "created": 1_677_652_288,
                "model": "gpt-3.5-turbo-0613",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Fine, thanks."},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 9, "completion_tokens": 4, "total_tokens": 13}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut request = client.chat(Model::Gpt3_5Turbo);
        request
            .add_message(UserMessage::build("Hello, how are you?"))
            .set_max_tokens(16);

        let response = request.generate(&client).await.expect("mock replies 200");

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.content(), "Fine, thanks.");
        assert_eq!(response.usage.total_tokens, 13);
    }

    #[tokio::test]
    async fn test_organization_header_is_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/models/gpt-4"))
            .and(header("openai-organization", "org-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gpt-4",
                "object": "model",
                "created": 1_687_882_411,
                "owned_by": "openai"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAI::builder()
            .api_key("k")
            .base_url(server.uri())
            .organization("org-42")
            .build();

        let model = models::retrieve(&client, "gpt-4").await.expect("mock replies 200");
        assert_eq!(model.owned_by, "openai");
    }

    #[tokio::test]
    async fn test_api_error_surfaces_as_transport() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = ChatRequest::create(&client, Model::Gpt4, [UserMessage::build("hi")], 1.0, 1)
            .await
            .expect_err("401");

        match err {
            OpenAIRequestError::Transport(TransportError::Api { status, code, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(code.as_deref(), Some("invalid_api_key"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_with_wrong_shape_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-123",
                "object": "chat.completion",
                "model": "gpt-4",
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .chat(Model::Gpt4)
            .generate(&client)
            .await
            .expect_err("no usage, no choices");

        assert!(err.is_malformed_response());
    }

    #[tokio::test]
    async fn test_success_with_html_body_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html><body>gateway</body></html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .chat(Model::Gpt4)
            .generate(&client)
            .await
            .expect_err("HTML is not a completion");

        assert!(err.is_malformed_response(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_invalid_temperature_never_reaches_server() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = ChatRequest::create(&client, Model::Gpt4, [UserMessage::build("hi")], -0.5, 1)
            .await
            .expect_err("negative temperature");

        assert!(err.is_invalid_parameter());
    }

    #[tokio::test]
    async fn test_image_and_moderation_endpoints() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .and(body_json(json!({
                "prompt": "a lighthouse",
                "n": 1,
                "size": "1024x1024",
                "response_format": "b64_json"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created": 1_589_478_378,
                "data": [{"b64_json": "aGVsbG8="}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/moderations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "modr-1",
                "model": "text-moderation-007",
                "results": [{
                    "flagged": true,
                    "categories": {"violence": true},
                    "category_scores": {"violence": 0.98}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);

        let image = ImageRequest::builder()
            .prompt("a lighthouse")
            .response_format(openai_wrapper::ImageFormat::B64Json)
            .build()
            .generate(&client)
            .await
            .expect("mock replies 200");
        assert_eq!(image.data.len(), 1);

        let moderation = ModerationRequest::new("something violent")
            .generate(&client)
            .await
            .expect("mock replies 200");
        assert!(moderation.flagged());
    }
}
