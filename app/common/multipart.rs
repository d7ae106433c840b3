use crate::common::error::Error;
use exo_core::simulation::UploadedFile;
use hyper::{header, Body, Request};
use std::collections::BTreeMap;

/// The text fields and chosen files of a submitted multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
	pub fields: BTreeMap<String, String>,
	pub files: BTreeMap<String, UploadedFile>,
}

/// Read a multipart form body. File contents are counted and then discarded. A file input left empty arrives without a file name and is skipped.
pub async fn parse_multipart(request: Request<Body>) -> anyhow::Result<MultipartForm> {
	let boundary = request
		.headers()
		.get(header::CONTENT_TYPE)
		.and_then(|content_type| content_type.to_str().ok())
		.and_then(|content_type| multer::parse_boundary(content_type).ok())
		.ok_or(Error::BadRequest)?;
	let mut multipart = multer::Multipart::new(request.into_body(), boundary);
	let mut form = MultipartForm::default();
	while let Some(field) = multipart
		.next_field()
		.await
		.map_err(|_| Error::BadRequest)?
	{
		let name = field.name().ok_or(Error::BadRequest)?.to_owned();
		let file_name = field
			.file_name()
			.map(|file_name| file_name.trim().to_owned());
		match file_name {
			Some(file_name) => {
				let bytes = field.bytes().await.map_err(|_| Error::BadRequest)?;
				if !file_name.is_empty() {
					let file = UploadedFile {
						file_name,
						size: bytes.len(),
					};
					form.files.insert(name, file);
				}
			}
			None => {
				let value = field.text().await.map_err(|_| Error::BadRequest)?;
				form.fields.insert(name, value);
			}
		}
	}
	Ok(form)
}

#[cfg(test)]
mod test {
	use super::*;

	fn request(body: &'static str) -> Request<Body> {
		Request::builder()
			.method("POST")
			.header(header::CONTENT_TYPE, "multipart/form-data; boundary=XYZ")
			.body(Body::from(body))
			.unwrap()
	}

	#[tokio::test]
	async fn test_parse_multipart() {
		let body = "--XYZ\r\nContent-Disposition: form-data; name=\"model\"\r\n\r\nk2\r\n\
			--XYZ\r\nContent-Disposition: form-data; name=\"file\"; filename=\"k2.csv\"\r\nContent-Type: text/csv\r\n\r\na,b\r\n1,2\r\n\
			--XYZ--\r\n";
		let form = parse_multipart(request(body)).await.unwrap();
		assert_eq!(form.fields.get("model").map(String::as_str), Some("k2"));
		assert_eq!(
			form.files.get("file"),
			Some(&UploadedFile {
				file_name: "k2.csv".to_owned(),
				size: 8,
			})
		);
	}

	#[tokio::test]
	async fn test_empty_file_input_is_skipped() {
		let body = "--XYZ\r\nContent-Disposition: form-data; name=\"file\"; filename=\"\"\r\nContent-Type: application/octet-stream\r\n\r\n\r\n\
			--XYZ--\r\n";
		let form = parse_multipart(request(body)).await.unwrap();
		assert!(form.files.is_empty());
	}

	#[tokio::test]
	async fn test_missing_boundary() {
		let request = Request::builder()
			.method("POST")
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from("model=k2"))
			.unwrap();
		let error = parse_multipart(request).await.unwrap_err();
		assert!(error.downcast_ref::<Error>().is_some());
	}
}
