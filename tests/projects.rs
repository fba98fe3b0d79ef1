//! Integration tests for projects, user assignments, task assignments, and tasks.

mod common;

use common::{client_for, page, project, task, task_assignment, user_assignment};
use harvest::inputs::{
    CreateProject, CreateTask, CreateTaskAssignment, CreateUserAssignment, UpdateProject,
    UpdateTask, UpdateTaskAssignment, UpdateUserAssignment,
};
use harvest::ListParams;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_projects_by_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("client_id", "5735776"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "projects",
            vec![project(14308069, "Online Store - Phase 1")],
            1,
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client_for(&server)
        .projects(&ListParams::new().client_id(5735776))
        .await
        .unwrap();

    assert_eq!(projects.projects.len(), 1);
    let store = &projects.projects[0];
    assert_eq!(store.code.as_deref(), Some("OS1"));
    assert_eq!(store.budget, Some(200.0));
    assert_eq!(store.client.currency.as_deref(), Some("EUR"));
    assert_eq!(store.ends_on, None);
}

#[tokio::test]
async fn test_project_create_update_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(json!({
            "client_id": 5735776,
            "name": "Your New Project",
            "is_billable": true,
            "bill_by": "Project",
            "budget_by": "project",
            "hourly_rate": 100.0,
            "budget": 10000.0
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(project(14308112, "Your New Project")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/projects/14308112"))
        .and(body_json(json!({"name": "New project name"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(project(14308112, "New project name")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/projects/14308112"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let input = CreateProject {
        hourly_rate: Some(100.0),
        budget: Some(10000.0),
        ..CreateProject::new(5735776, "Your New Project", true, "Project", "project")
    };
    let created = harvest.create_project(&input).await.unwrap();
    assert_eq!(created.id, 14308112);

    let update = UpdateProject {
        name: Some("New project name".to_string()),
        ..Default::default()
    };
    let updated = harvest.update_project(14308112, &update).await.unwrap();
    assert_eq!(updated.name, "New project name");

    tokio_test::assert_ok!(harvest.delete_project(14308112).await);
}

#[tokio::test]
async fn test_user_assignments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "user_assignments",
            vec![user_assignment(130403297), user_assignment(130403296)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/14308069/user_assignments"))
        .and(query_param("is_active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "user_assignments",
            vec![user_assignment(130403297)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/14308069/user_assignments/130403297"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_assignment(130403297)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/projects/14308069/user_assignments"))
        .and(body_json(json!({"user_id": 1782974})))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_assignment(125068758)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/projects/14308069/user_assignments/125068758"))
        .and(body_json(json!({"budget": 120.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_assignment(125068758)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/projects/14308069/user_assignments/125068758"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let all = harvest.user_assignments(&ListParams::new()).await.unwrap();
    assert_eq!(all.user_assignments.len(), 2);

    let active = harvest
        .project_user_assignments(14308069, &ListParams::new().is_active(true))
        .await
        .unwrap();
    assert_eq!(active.user_assignments[0].id, 130403297);

    let one = harvest
        .get_user_assignment(14308069, 130403297)
        .await
        .unwrap();
    assert_eq!(one.user.map(|u| u.name), Some("Kim Allen".to_string()));

    let created = harvest
        .create_user_assignment(14308069, &CreateUserAssignment::new(1782974))
        .await
        .unwrap();
    assert_eq!(created.id, 125068758);

    let update = UpdateUserAssignment {
        budget: Some(120.0),
        ..Default::default()
    };
    tokio_test::assert_ok!(
        harvest
            .update_user_assignment(14308069, 125068758, &update)
            .await
    );

    tokio_test::assert_ok!(harvest.delete_user_assignment(14308069, 125068758).await);
}

#[tokio::test]
async fn test_task_assignments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "task_assignments",
            vec![task_assignment(160726647), task_assignment(160726646)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/14308069/task_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "task_assignments",
            vec![task_assignment(155505016)],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/14308069/task_assignments/155505016"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_assignment(155505016)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/projects/14308069/task_assignments"))
        .and(body_json(json!({"task_id": 8083800, "is_active": true, "hourly_rate": 75.5})))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_assignment(155506339)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/projects/14308069/task_assignments/155506339"))
        .and(body_json(json!({"budget": 120.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_assignment(155506339)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/projects/14308069/task_assignments/155506339"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let all = harvest.task_assignments(&ListParams::new()).await.unwrap();
    assert_eq!(all.task_assignments.len(), 2);

    let on_project = harvest
        .project_task_assignments(14308069, &ListParams::new())
        .await
        .unwrap();
    assert_eq!(on_project.task_assignments[0].id, 155505016);

    let one = harvest
        .get_task_assignment(14308069, 155505016)
        .await
        .unwrap();
    assert!(one.billable);
    assert_eq!(one.task.map(|t| t.id), Some(8083365));

    let input = CreateTaskAssignment {
        is_active: Some(true),
        hourly_rate: Some(75.5),
        ..CreateTaskAssignment::new(8083800)
    };
    let created = harvest
        .create_task_assignment(14308069, &input)
        .await
        .unwrap();
    assert_eq!(created.id, 155506339);

    let update = UpdateTaskAssignment {
        budget: Some(120.0),
        ..Default::default()
    };
    tokio_test::assert_ok!(
        harvest
            .update_task_assignment(14308069, 155506339, &update)
            .await
    );

    tokio_test::assert_ok!(harvest.delete_task_assignment(14308069, 155506339).await);
}

#[tokio::test]
async fn test_tasks_crud() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "tasks",
            vec![task(8083800, "Business Development"), task(8083369, "Research")],
            1,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tasks/8083800"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task(8083800, "Business Development")),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({"name": "New Task Name", "default_hourly_rate": 120.0})))
        .respond_with(ResponseTemplate::new(201).set_body_json(task(8083782, "New Task Name")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/tasks/8083782"))
        .and(body_json(json!({"is_default": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task(8083782, "New Task Name")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/8083782"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = client_for(&server);

    let tasks = harvest.tasks(&ListParams::new()).await.unwrap();
    assert_eq!(tasks.tasks.len(), 2);
    assert_eq!(tasks.tasks[1].name, "Research");

    let task = harvest.get_task(8083800).await.unwrap();
    assert_eq!(task.default_hourly_rate, Some(120.0));

    let input = CreateTask {
        default_hourly_rate: Some(120.0),
        ..CreateTask::new("New Task Name")
    };
    let created = harvest.create_task(&input).await.unwrap();
    assert_eq!(created.id, 8083782);

    let update = UpdateTask {
        is_default: Some(true),
        ..Default::default()
    };
    tokio_test::assert_ok!(harvest.update_task(8083782, &update).await);

    tokio_test::assert_ok!(harvest.delete_task(8083782).await);
}
