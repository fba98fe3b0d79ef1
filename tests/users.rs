//! Integration tests for users, roles, rates, and project assignments.

mod common;

use common::{client_for, page, project_assignment, rate, role, user};
use harvest::inputs::{CreateRate, CreateUser, RoleInput, UpdateUser};
use harvest::{HarvestError, ListParams};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_currently_authenticated_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user(1782974, "Bob", "Powell")))
        .expect(1)
        .mount(&server)
        .await;

    let me = client_for(&server)
        .get_currently_authenticated_user()
        .await
        .unwrap();

    assert_eq!(me.id, 1782974);
    assert_eq!(me.first_name, "Bob");
    assert_eq!(me.weekly_capacity, 126000);
    assert_eq!(me.roles, vec!["Designer".to_string()]);
}

#[tokio::test]
async fn test_users_crud() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("is_active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "users",
            vec![user(1782974, "Jim", "Allen"), user(1782959, "Kim", "Allen")],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1782959"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user(1782959, "Kim", "Allen")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "first_name": "George",
            "last_name": "Frank",
            "email": "george@example.com",
            "is_contractor": false
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(user(1782975, "George", "Frank")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/users/1782975"))
        .and(body_json(json!({"telephone": "888-555-1212"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(user(1782975, "George", "Frank")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/1782975"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let users = harvest
        .users(&ListParams::new().is_active(true))
        .await
        .unwrap();
    assert_eq!(users.users.len(), 2);

    let kim = harvest.get_user(1782959).await.unwrap();
    assert_eq!(kim.last_name, "Allen");

    let input = CreateUser {
        is_contractor: Some(false),
        ..CreateUser::new("George", "Frank", "george@example.com")
    };
    let george = harvest.create_user(&input).await.unwrap();
    assert_eq!(george.id, 1782975);

    let update = UpdateUser {
        telephone: Some("888-555-1212".to_string()),
        ..Default::default()
    };
    tokio_test::assert_ok!(harvest.update_user(1782975, &update).await);

    tokio_test::assert_ok!(harvest.delete_user(1782975).await);
}

#[tokio::test]
async fn test_create_user_requires_email() {
    let server = MockServer::start().await;

    let result = client_for(&server)
        .create_user(&CreateUser::new("George", "Frank", ""))
        .await;

    match result {
        Err(HarvestError::Validation(message)) => assert_eq!(message, "email is required"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_roles_crud() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "roles",
            vec![role(618100, "Designer", &[1782959])],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/roles/618100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(role(618100, "Designer", &[1782959])),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/roles"))
        .and(body_json(json!({"name": "Marketing", "user_ids": [1782959]})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(role(617670, "Marketing", &[1782959])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/roles/617670"))
        .and(body_json(json!({"name": "Social Media"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(role(617670, "Social Media", &[1782959])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/roles/617670"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let roles = harvest.roles(&ListParams::new()).await.unwrap();
    assert_eq!(roles.roles[0].user_ids, vec![1782959]);

    let designer = harvest.get_role(618100).await.unwrap();
    assert_eq!(designer.name, "Designer");

    let created = harvest
        .create_role(&RoleInput::new("Marketing").user_ids(vec![1782959]))
        .await
        .unwrap();
    assert_eq!(created.id, 617670);

    let renamed = harvest
        .update_role(617670, &RoleInput::new("Social Media"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Social Media");

    tokio_test::assert_ok!(harvest.delete_role(617670).await);
}

#[tokio::test]
async fn test_create_role_without_name_is_rejected() {
    let server = MockServer::start().await;

    let result = client_for(&server)
        .create_role(&RoleInput::default().user_ids(vec![1782959]))
        .await;

    assert!(matches!(result, Err(HarvestError::Validation(_))));
}

#[tokio::test]
async fn test_billable_and_cost_rates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1782959/billable_rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "billable_rates",
            vec![rate(1836493, 8.4)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1782959/billable_rates/1836493"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate(1836493, 8.4)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/1782959/billable_rates"))
        .and(body_json(json!({"amount": 8.5, "start_date": "2020-05-01"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(rate(1836555, 8.5)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1782959/cost_rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "cost_rates",
            vec![rate(825301, 9.25)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1782959/cost_rates/825301"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate(825301, 9.25)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/1782959/cost_rates"))
        .and(body_json(json!({"amount": 13.0})))
        .respond_with(ResponseTemplate::new(201).set_body_json(rate(825302, 13.0)))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let rates = harvest
        .billable_rates(1782959, &ListParams::new())
        .await
        .unwrap();
    assert_eq!(rates.billable_rates[0].amount, 8.4);

    let one = harvest.get_billable_rate(1782959, 1836493).await.unwrap();
    assert_eq!(one.start_date, None);

    let created = harvest
        .create_billable_rate(1782959, &CreateRate::new(8.5).starting("2020-05-01"))
        .await
        .unwrap();
    assert_eq!(created.id, 1836555);

    let costs = harvest
        .user_cost_rates(1782959, &ListParams::new())
        .await
        .unwrap();
    assert_eq!(costs.cost_rates[0].id, 825301);

    let cost = harvest.get_user_cost_rate(1782959, 825301).await.unwrap();
    assert_eq!(cost.amount, 9.25);

    let created = harvest
        .create_user_cost_rate(1782959, &CreateRate::new(13.0))
        .await
        .unwrap();
    assert_eq!(created.amount, 13.0);
}

#[tokio::test]
async fn test_negative_rate_is_rejected() {
    let server = MockServer::start().await;

    let result = client_for(&server)
        .create_billable_rate(1782959, &CreateRate::new(-1.0))
        .await;

    assert!(matches!(result, Err(HarvestError::Validation(_))));
}

#[tokio::test]
async fn test_project_assignments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1782959/project_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "project_assignments",
            vec![project_assignment(125068554)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me/project_assignments"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "project_assignments",
            vec![project_assignment(125066109)],
            2,
            None,
        )))
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let assignments = harvest
        .project_assignments(1782959, &ListParams::new())
        .await
        .unwrap();
    let first = &assignments.project_assignments[0];
    assert_eq!(first.project.name, "Online Store - Phase 1");
    assert_eq!(first.task_assignments.len(), 1);

    let mine = harvest
        .my_project_assignments(&ListParams::new().page(2))
        .await
        .unwrap();
    assert_eq!(mine.project_assignments[0].id, 125066109);
    assert_eq!(mine.pagination.page, 2);
}
