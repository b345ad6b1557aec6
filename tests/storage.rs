mod common;

use educheck::models::{
    class_tests::requests::CreateTestRequest,
    classes::requests::{CreateClassRequest, UpdateClassRequest},
    submissions::requests::CreateSubmissionRequest,
    users::entities::UserRole,
};
use educheck::runtime::lifetime::startup::seed_default_users;

use crate::common::{create_user, memory_storage};

fn class_request(code: &str) -> CreateClassRequest {
    CreateClassRequest {
        name: "Algebra I".to_string(),
        code: code.to_string(),
        category: Some("1st Year".to_string()),
    }
}

#[actix_web::test]
async fn test_duplicate_class_code_is_conflict() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;

    storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap();
    let err = storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "E006");
    assert_eq!(err.message(), "Class code already exists");
    assert_eq!(storage.list_teacher_classes(teacher.id).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_duplicate_enrollment_is_conflict() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class = storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap();

    storage.create_enrollment(student.id, class.id).await.unwrap();
    let err = storage
        .create_enrollment(student.id, class.id)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Already enrolled");
}

#[actix_web::test]
async fn test_update_class_partial() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let class = storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap();
    assert!(!class.is_archived);

    let updated = storage
        .update_class(
            class.id,
            UpdateClassRequest {
                is_archived: Some(true),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(updated.is_archived);

    let unchanged = storage
        .update_class(class.id, UpdateClassRequest::default())
        .await
        .unwrap()
        .unwrap();
    assert!(unchanged.is_archived);

    assert!(
        storage
            .update_class(9999, UpdateClassRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn test_delete_class_cascades() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class = storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap();
    storage.create_enrollment(student.id, class.id).await.unwrap();
    let test = storage
        .create_test(
            class.id,
            CreateTestRequest {
                title: "Quiz 1".to_string(),
                total_marks: Some(20),
            },
        )
        .await
        .unwrap();
    let submission = storage
        .create_submission(test.id, student.id, CreateSubmissionRequest::default())
        .await
        .unwrap();

    assert!(storage.delete_class(class.id).await.unwrap());
    assert!(!storage.delete_class(class.id).await.unwrap());

    assert!(storage.get_enrollment(student.id, class.id).await.unwrap().is_none());
    assert!(storage.get_test_by_id(test.id).await.unwrap().is_none());
    assert!(
        storage
            .get_submission_by_id(submission.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.list_student_classes(student.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_enrolled_student_ids_grouped_by_class() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let a = create_user(&storage, "a@example.com", UserRole::Student).await;
    let b = create_user(&storage, "b@example.com", UserRole::Student).await;
    let first = storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap();
    let second = storage
        .create_class(teacher.id, class_request("ALG2"))
        .await
        .unwrap();

    storage.create_enrollment(a.id, first.id).await.unwrap();
    storage.create_enrollment(b.id, first.id).await.unwrap();
    storage.create_enrollment(b.id, second.id).await.unwrap();

    let grouped = storage
        .list_enrolled_student_ids(&[first.id, second.id])
        .await
        .unwrap();
    let mut first_ids = grouped[&first.id].clone();
    first_ids.sort();
    assert_eq!(first_ids, vec![a.id, b.id]);
    assert_eq!(grouped[&second.id], vec![b.id]);

    assert!(storage.list_enrolled_student_ids(&[]).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_grade_submission() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class = storage
        .create_class(teacher.id, class_request("ALG1"))
        .await
        .unwrap();
    let test = storage
        .create_test(
            class.id,
            CreateTestRequest {
                title: "Quiz 1".to_string(),
                total_marks: None,
            },
        )
        .await
        .unwrap();
    let submission = storage
        .create_submission(
            test.id,
            student.id,
            CreateSubmissionRequest {
                answer_sheet_url: Some("https://files.example.com/a.pdf".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(submission.marks_obtained, None);

    let graded = storage
        .update_submission_marks(submission.id, 17)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.marks_obtained, Some(17));
    assert_eq!(
        storage.list_student_submissions(student.id).await.unwrap()[0].marks_obtained,
        Some(17)
    );
}

#[actix_web::test]
async fn test_seed_default_users_once() {
    let storage = memory_storage().await;

    seed_default_users(&storage).await;
    seed_default_users(&storage).await;

    assert_eq!(storage.count_users().await.unwrap(), 2);
    let teacher = storage.get_user_by_id(1).await.unwrap().unwrap();
    let student = storage.get_user_by_id(2).await.unwrap().unwrap();
    assert_eq!(teacher.role, UserRole::Teacher);
    assert_eq!(student.role, UserRole::Student);
}
