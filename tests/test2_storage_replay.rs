use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;

use s3_site_mgr::errors::SiteMgrError;
use s3_site_mgr::s3::S3StorageClient;

/// Wire a manager to a canned sequence of HTTP responses; no network involved.
fn replay_manager(events: Vec<ReplayEvent>) -> (S3StorageClient, StaticReplayClient) {
    let http_client = StaticReplayClient::new(events);
    let conf = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "AKIDEXAMPLE",
            "notarealsecretkey",
            None,
            None,
            "test",
        ))
        .http_client(http_client.clone())
        .build();

    let manager = S3StorageClient::with_client(
        Client::from_conf(conf),
        Some("us-east-1".to_string()),
        0,
    )
    .unwrap();

    (manager, http_client)
}

fn event(status: u16, body: &str) -> ReplayEvent {
    ReplayEvent::new(
        http::Request::builder()
            .uri("https://my-site.s3.us-east-1.amazonaws.com/")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(status)
            .body(SdkBody::from(body))
            .unwrap(),
    )
}

#[test]
fn setup_bucket_issues_create_policy_and_website_calls() {
    let (manager, http_client) = replay_manager(vec![
        event(200, ""),
        event(204, ""),
        event(200, ""),
    ]);

    manager.init_bucket("my-site").unwrap();
    manager.set_policy("my-site").unwrap();
    manager.configure_website("my-site").unwrap();

    let requests: Vec<_> = http_client.actual_requests().collect();
    assert_eq!(requests.len(), 3);

    // create-bucket in us-east-1 carries no location constraint body
    assert_eq!(requests[0].method(), "PUT");

    let policy_req = &requests[1];
    assert!(policy_req.uri().contains("policy"));
    let policy_body = std::str::from_utf8(policy_req.body().bytes().unwrap()).unwrap();
    assert!(policy_body.contains("arn:aws:s3:::my-site/*"));
    assert!(policy_body.contains("s3:GetObject"));

    let website_req = &requests[2];
    assert!(website_req.uri().contains("website"));
    let website_body = std::str::from_utf8(website_req.body().bytes().unwrap()).unwrap();
    assert!(website_body.contains("index.html"));
    assert!(website_body.contains("error.html"));
}

#[test]
fn init_bucket_succeeds_when_this_account_already_owns_it() {
    let already_owned = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>BucketAlreadyOwnedByYou</Code>
  <Message>Your previous request to create the named bucket succeeded and you already own it.</Message>
  <BucketName>my-site</BucketName>
  <RequestId>REQ1</RequestId>
  <HostId>host</HostId>
</Error>"#;

    let (manager, _http_client) = replay_manager(vec![event(409, already_owned)]);

    manager.init_bucket("my-site").unwrap();
}

#[test]
fn init_bucket_surfaces_a_name_taken_by_another_account() {
    let taken = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>BucketAlreadyExists</Code>
  <Message>The requested bucket name is not available.</Message>
  <BucketName>my-site</BucketName>
  <RequestId>REQ2</RequestId>
  <HostId>host</HostId>
</Error>"#;

    let (manager, _http_client) = replay_manager(vec![event(409, taken)]);

    match manager.init_bucket("my-site") {
        Err(SiteMgrError::Storage(msg)) => assert!(msg.contains("not available")),
        other => panic!("expected storage error, got {other:?}"),
    }
}

#[test]
fn all_buckets_returns_one_name_per_bucket() {
    let listing = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner><ID>1234</ID><DisplayName>owner</DisplayName></Owner>
  <Buckets>
    <Bucket><Name>my-site</Name><CreationDate>2026-08-01T12:00:00.000Z</CreationDate></Bucket>
    <Bucket><Name>staging-site</Name><CreationDate>2026-08-02T12:00:00.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

    let (manager, _http_client) = replay_manager(vec![event(200, listing)]);

    let buckets = manager.all_buckets().unwrap();
    assert_eq!(buckets, vec!["my-site", "staging-site"]);
}

#[test]
fn all_objects_returns_every_key_in_the_page() {
    let listing = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>my-site</Name>
  <Prefix></Prefix>
  <KeyCount>2</KeyCount>
  <MaxKeys>1000</MaxKeys>
  <IsTruncated>false</IsTruncated>
  <Contents>
    <Key>css/app.css</Key>
    <LastModified>2026-08-01T12:00:00.000Z</LastModified>
    <ETag>&quot;abc&quot;</ETag>
    <Size>7</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>index.html</Key>
    <LastModified>2026-08-01T12:00:00.000Z</LastModified>
    <ETag>&quot;def&quot;</ETag>
    <Size>17</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
</ListBucketResult>"#;

    let (manager, _http_client) = replay_manager(vec![event(200, listing)]);

    let keys = manager.all_objects("my-site").unwrap();
    assert_eq!(keys, vec!["css/app.css", "index.html"]);
}

#[test]
fn upload_sets_content_type_from_the_key_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let local = dir.path().join("index.html");
    std::fs::write(&local, "<html>home</html>").unwrap();

    let (manager, http_client) = replay_manager(vec![event(200, "")]);

    manager.upload_file("my-site", &local, "index.html").unwrap();

    let requests: Vec<_> = http_client.actual_requests().collect();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method(), "PUT");
    assert!(requests[0].uri().contains("index.html"));
    assert_eq!(
        requests[0].headers().get("content-type"),
        Some("text/html")
    );
}
