#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        api::{sofascore, utils::make_request},
        models::RequestDescriptor,
        test::stub::{header, request_line, serve_once, serve_raw_once, test_client, test_config},
    };

    #[tokio::test]
    async fn issues_exact_path_query_and_headers() {
        let (base_url, server) = serve_once("200 OK", r#"{"seasons": []}"#).await;
        let config = test_config(&base_url);

        sofascore::get_tournament_seasons(17, &test_client(), &config)
            .await
            .unwrap();

        let head = server.await.unwrap();
        assert_eq!(
            request_line(&head),
            "GET /tournaments/get-seasons?tournamentId=17 HTTP/1.1"
        );
        assert_eq!(header(&head, "x-rapidapi-key"), Some("test-key"));
        assert_eq!(
            header(&head, "x-rapidapi-host"),
            Some("sofascore.p.rapidapi.com")
        );
    }

    #[tokio::test]
    async fn player_detail_uses_player_id() {
        let (base_url, server) = serve_once("200 OK", r#"{"player": {"id": 750}}"#).await;
        let config = test_config(&base_url);

        let result = sofascore::get_player_detail(750, &test_client(), &config)
            .await
            .unwrap();

        let head = server.await.unwrap();
        assert_eq!(
            request_line(&head),
            "GET /players/detail?playerId=750 HTTP/1.1"
        );
        assert_eq!(result["player"]["id"], 750);
    }

    #[tokio::test]
    async fn decodes_body_exactly() {
        let (base_url, _server) = serve_once("200 OK", r#"{"seasons": []}"#).await;
        let config = test_config(&base_url);

        let result = sofascore::get_tournament_seasons(17, &test_client(), &config)
            .await
            .unwrap();

        assert_eq!(result, json!({"seasons": []}));
        assert_eq!(result.to_string(), r#"{"seasons":[]}"#);
    }

    #[tokio::test]
    async fn generic_get_passes_all_params() {
        let (base_url, server) = serve_once("200 OK", "[1, 2, 3]").await;
        let config = test_config(&base_url);
        let params = vec![
            ("teamId".to_string(), "23400".to_string()),
            ("page".to_string(), "0".to_string()),
        ];

        let result = sofascore::get("/teams/get-players", &params, &test_client(), &config)
            .await
            .unwrap();

        let head = server.await.unwrap();
        assert_eq!(
            request_line(&head),
            "GET /teams/get-players?page=0&teamId=23400 HTTP/1.1"
        );
        assert_eq!(result, json!([1, 2, 3]));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base_url, _server) =
            serve_once("403 Forbidden", r#"{"message": "Invalid API key"}"#).await;
        let config = test_config(&base_url);

        let err = sofascore::get_tournament_seasons(17, &test_client(), &config)
            .await
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("403"), "{}", message);
        assert!(message.contains("tournaments/get-seasons"), "{}", message);
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let (base_url, _server) = serve_once("200 OK", "<html>oops</html>").await;
        let config = test_config(&base_url);
        let request = RequestDescriptor::new(&config, "players/detail").with_param("playerId", "750");

        let result = make_request(&test_client(), &request).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn truncated_body_is_an_error_naming_the_path() {
        let (base_url, _server) = serve_raw_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"seas".to_string(),
        )
        .await;
        let config = test_config(&base_url);
        let request = RequestDescriptor::new(&config, "tournaments/get-seasons");

        let err = make_request(&test_client(), &request).await.unwrap_err();

        let message = format!("{:#}", err);
        assert!(
            message.contains("Failed to read response body from tournaments/get-seasons"),
            "{}",
            message
        );
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        let config = test_config("http://127.0.0.1:1");
        let request = RequestDescriptor::new(&config, "players/detail");

        assert!(make_request(&test_client(), &request).await.is_err());
    }
}
