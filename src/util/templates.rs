//! Message composer for the four outbound email kinds. Every function is
//! pure: submission data in, `(text_body, html_body)` out. User-provided
//! strings are escaped before being interpolated into HTML.

use html_escape::encode_text;

use crate::dto::quote_dto::UploadedFile;
use crate::model::contact::ContactSubmission;
use crate::model::quote::{Dimensions, QuoteSubmission, Urgency};

/// Render dimensions as `Length: 10 feet | Width: 12 feet`, appending a
/// height clause only when a height was given.
pub fn format_dimensions(dimensions: &Dimensions) -> String {
    let unit = dimensions.unit.as_str();
    let mut rendered = format!(
        "Length: {} {} | Width: {} {}",
        dimensions.length, unit, dimensions.width, unit
    );
    if let Some(height) = &dimensions.height {
        rendered.push_str(&format!(" | Height: {} {}", height, unit));
    }
    rendered
}

fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Emergency => "#dc2626",
        Urgency::Urgent => "#f59e0b",
        Urgency::Standard => "#3b82f6",
    }
}

/// Staff notification for a contact submission.
pub fn contact_notification(
    submission: &ContactSubmission,
    received_at: &str,
) -> (String, String) {
    let text = format!(
        r#"New Contact Form Submission - ClearSpan Glass

Customer: {first_name} {last_name}
Email: {email}
Phone: {phone}
Preferred Contact: {preferred_contact}

Subject: {subject}

Message:
{message}

Received: {received_at}"#,
        first_name = submission.first_name,
        last_name = submission.last_name,
        email = submission.email,
        phone = submission.phone,
        preferred_contact = submission.preferred_contact.as_str(),
        subject = submission.subject,
        message = submission.message,
        received_at = received_at,
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Contact Form Submission</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; padding: 30px; text-align: center; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f8fafc; padding: 30px; border-radius: 0 0 8px 8px; }}
    .info-item {{ background: white; padding: 15px; border-radius: 6px; border-left: 4px solid #3b82f6; margin: 10px 0; }}
    .label {{ font-weight: bold; color: #1e293b; margin-bottom: 5px; }}
    .value {{ color: #475569; }}
    .message-box {{ background: white; padding: 20px; border-radius: 6px; margin: 20px 0; border: 1px solid #e2e8f0; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>🔔 New Contact Form Submission</h1>
      <p>ClearSpan Glass - Customer Inquiry</p>
    </div>
    <div class="content">
      <div class="info-item">
        <div class="label">👤 Customer Name</div>
        <div class="value">{first_name} {last_name}</div>
      </div>
      <div class="info-item">
        <div class="label">📧 Email Address</div>
        <div class="value">{email}</div>
      </div>
      <div class="info-item">
        <div class="label">📱 Phone Number</div>
        <div class="value">{phone}</div>
      </div>
      <div class="info-item">
        <div class="label">💬 Preferred Contact</div>
        <div class="value">{preferred_contact}</div>
      </div>
      <div class="info-item">
        <div class="label">📋 Subject</div>
        <div class="value">{subject}</div>
      </div>
      <div class="message-box">
        <div class="label">💭 Message</div>
        <div class="value">{message}</div>
      </div>
      <p style="text-align: center; margin-top: 30px; color: #64748b;">
        <strong>⏰ Received:</strong> {received_at}
      </p>
    </div>
  </div>
</body>
</html>"#,
        first_name = encode_text(&submission.first_name),
        last_name = encode_text(&submission.last_name),
        email = encode_text(&submission.email),
        phone = encode_text(&submission.phone),
        preferred_contact = submission.preferred_contact.as_str(),
        subject = encode_text(&submission.subject),
        message = encode_text(&submission.message).replace('\n', "<br>"),
        received_at = encode_text(received_at),
    );

    (text, html)
}

/// Customer confirmation for a contact submission.
pub fn contact_confirmation(first_name: &str, site_url: &str) -> (String, String) {
    let text = format!(
        r#"Thank you for contacting ClearSpan Glass!

Dear {first_name},

We have received your message and will get back to you within 24 hours.

What happens next?
- Our team will review your inquiry within 24 hours
- We'll contact you using your preferred method
- We'll provide personalized solutions for your needs

Visit us: {site_url}

Best regards,
The ClearSpan Glass Team"#,
        first_name = first_name,
        site_url = site_url,
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Thank you for contacting ClearSpan Glass</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; padding: 40px; text-align: center; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f8fafc; padding: 40px; border-radius: 0 0 8px 8px; }}
    .cta-button {{ display: inline-block; background: #3b82f6; color: white; padding: 12px 24px; text-decoration: none; border-radius: 6px; margin: 20px 0; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>✅ Message Received!</h1>
      <p>Thank you for contacting ClearSpan Glass</p>
    </div>
    <div class="content">
      <p>Dear {first_name},</p>
      <p>Thank you for reaching out to ClearSpan Glass! We have successfully received your message and our team will review it shortly.</p>
      <p><strong>What happens next?</strong></p>
      <ul>
        <li>📧 Our team will review your inquiry within 24 hours</li>
        <li>📞 We'll contact you using your preferred method</li>
        <li>🎯 We'll provide personalized solutions for your needs</li>
      </ul>
      <p>Best regards,<br>
      <strong>The ClearSpan Glass Team</strong></p>
      <p style="text-align: center; margin-top: 30px;">
        <a href="{site_url}" class="cta-button">Visit Our Website</a>
      </p>
    </div>
  </div>
</body>
</html>"#,
        first_name = encode_text(first_name),
        site_url = encode_text(site_url),
    );

    (text, html)
}

/// Staff notification for a quote request: full project details,
/// dimensions, service tags, attachment metadata, and an urgency badge.
pub fn quote_notification(
    submission: &QuoteSubmission,
    files: &[UploadedFile],
    quote_id: &str,
    received_at: &str,
) -> (String, String) {
    let dimensions = format_dimensions(&submission.dimensions);
    let services = submission.service_needed.join(", ");
    let preferred_date = submission
        .preferred_date
        .as_deref()
        .unwrap_or("Not specified");

    let files_text = if files.is_empty() {
        String::new()
    } else {
        let listing = files
            .iter()
            .map(|f| format!("- {} ({}, {} bytes)", f.name, f.content_type, f.size))
            .collect::<Vec<_>>()
            .join("\n");
        format!("\nAttached Files: {}\n{}\n", files.len(), listing)
    };

    let text = format!(
        r#"{marker}New Quote Request: {quote_id}

Customer: {first_name} {last_name}
Email: {email}
Phone: {phone}
Location: {location}

Project Details:
- Type: {project_type}
- Glass Type: {glass_type}
- Services: {services}
- Dimensions: {dimensions}
- Urgency: {urgency}
- Budget: {budget}
- Preferred Date: {preferred_date}

Description:
{description}
{files_text}
Received: {received_at}"#,
        marker = submission.urgency.subject_marker(),
        quote_id = quote_id,
        first_name = submission.first_name,
        last_name = submission.last_name,
        email = submission.email,
        phone = submission.phone,
        location = submission.project_location,
        project_type = submission.project_type.as_str(),
        glass_type = submission.glass_type.as_str(),
        services = services,
        dimensions = dimensions,
        urgency = submission.urgency.as_str(),
        budget = submission.budget.as_str(),
        preferred_date = preferred_date,
        description = submission.project_description,
        files_text = files_text,
        received_at = received_at,
    );

    let color = urgency_color(submission.urgency);
    let service_tags = submission
        .service_needed
        .iter()
        .map(|s| format!(r#"<span class="service-tag">{}</span>"#, encode_text(s)))
        .collect::<Vec<_>>()
        .join(" ");
    let files_html = if files.is_empty() {
        String::new()
    } else {
        let listing = files
            .iter()
            .map(|f| {
                format!(
                    "<div>📄 {} ({})</div>",
                    encode_text(&f.name),
                    encode_text(&f.content_type)
                )
            })
            .collect::<Vec<_>>()
            .join("\n          ");
        format!(
            r#"<h3>📎 Attached Files</h3>
      <div class="info-item">
        <div class="value">
          {}
        </div>
      </div>"#,
            listing
        )
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Quote Request - {quote_id}</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 700px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, {color}, #6366f1); color: white; padding: 30px; text-align: center; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f8fafc; padding: 30px; border-radius: 0 0 8px 8px; }}
    .urgency-badge {{ color: {color}; padding: 8px 16px; border-radius: 20px; font-weight: bold; display: inline-block; margin-bottom: 20px; }}
    .info-item {{ background: white; padding: 15px; border-radius: 6px; border-left: 4px solid {color}; margin: 10px 0; }}
    .label {{ font-weight: bold; color: #1e293b; margin-bottom: 5px; }}
    .value {{ color: #475569; }}
    .service-tag {{ background: #e0f2fe; color: #0369a1; padding: 4px 8px; border-radius: 4px; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>💼 New Quote Request</h1>
      <p>Quote ID: {quote_id}</p>
    </div>
    <div class="content">
      <div class="urgency-badge">{badge} REQUEST</div>
      <h3>👤 Customer Information</h3>
      <div class="info-item">
        <div class="label">Name</div>
        <div class="value">{first_name} {last_name}</div>
      </div>
      <div class="info-item">
        <div class="label">Email</div>
        <div class="value">{email}</div>
      </div>
      <div class="info-item">
        <div class="label">Phone</div>
        <div class="value">{phone}</div>
      </div>
      <div class="info-item">
        <div class="label">Location</div>
        <div class="value">{location}</div>
      </div>
      <h3>🏗️ Project Details</h3>
      <div class="info-item">
        <div class="label">Project Type</div>
        <div class="value">{project_type}</div>
      </div>
      <div class="info-item">
        <div class="label">Glass Type</div>
        <div class="value">{glass_type}</div>
      </div>
      <div class="info-item">
        <div class="label">Budget Range</div>
        <div class="value">{budget}</div>
      </div>
      <div class="info-item">
        <div class="label">Preferred Date</div>
        <div class="value">{preferred_date}</div>
      </div>
      <div class="info-item">
        <div class="label">Services Needed</div>
        <div class="value">{service_tags}</div>
      </div>
      <h3>📏 Dimensions</h3>
      <div class="info-item">
        <div class="value">{dimensions}</div>
      </div>
      <h3>📝 Project Description</h3>
      <div class="info-item">
        <div class="value">{description}</div>
      </div>
      {files_html}
      <p style="text-align: center; margin-top: 30px; color: #64748b;">
        <strong>⏰ Received:</strong> {received_at}
      </p>
    </div>
  </div>
</body>
</html>"#,
        quote_id = encode_text(quote_id),
        color = color,
        badge = submission.urgency.badge_label(),
        first_name = encode_text(&submission.first_name),
        last_name = encode_text(&submission.last_name),
        email = encode_text(&submission.email),
        phone = encode_text(&submission.phone),
        location = encode_text(&submission.project_location),
        project_type = submission.project_type.as_str(),
        glass_type = submission.glass_type.as_str(),
        budget = submission.budget.as_str(),
        preferred_date = encode_text(preferred_date),
        service_tags = service_tags,
        dimensions = encode_text(&dimensions),
        description = encode_text(&submission.project_description).replace('\n', "<br>"),
        files_html = files_html,
        received_at = encode_text(received_at),
    );

    (text, html)
}

/// Customer confirmation for a quote request: the reference id and the
/// fixed four-step timeline.
pub fn quote_confirmation(first_name: &str, quote_id: &str, site_url: &str) -> (String, String) {
    let text = format!(
        r#"Quote Request Received - ClearSpan Glass

Dear {first_name},

Your quote request has been received successfully!

Quote Reference ID: {quote_id}

Timeline:
1. Review (0-2 hours): Our experts review your requirements
2. Analysis (2-24 hours): We analyze dimensions, materials, and complexity
3. Quote Preparation (24-48 hours): Detailed quote with pricing and timeline
4. Delivery: You receive your comprehensive quote via email

Reference: Quote ID {quote_id}
Visit us: {site_url}

Best regards,
The ClearSpan Glass Sales Team"#,
        first_name = first_name,
        quote_id = quote_id,
        site_url = site_url,
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Quote Request Confirmation - {quote_id}</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; padding: 40px; text-align: center; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f8fafc; padding: 40px; border-radius: 0 0 8px 8px; }}
    .quote-id {{ background: white; padding: 15px; border-radius: 6px; text-align: center; margin: 20px 0; border: 2px solid #3b82f6; }}
    .timeline {{ background: white; padding: 20px; border-radius: 6px; margin: 20px 0; }}
    .timeline-item {{ margin: 10px 0; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>✅ Quote Request Received!</h1>
      <p>We're preparing your custom quote</p>
    </div>
    <div class="content">
      <p>Dear {first_name},</p>
      <p>Thank you for your quote request! We have successfully received your project details and our team is already working on preparing a comprehensive quote for you.</p>
      <div class="quote-id">
        <strong>📋 Your Quote Reference ID:</strong><br>
        <span style="font-size: 18px; color: #3b82f6; font-weight: bold;">{quote_id}</span>
      </div>
      <div class="timeline">
        <h3>📅 What happens next?</h3>
        <div class="timeline-item"><strong>1. Review (0-2 hours):</strong> Our experts review your requirements</div>
        <div class="timeline-item"><strong>2. Analysis (2-24 hours):</strong> We analyze dimensions, materials, and complexity</div>
        <div class="timeline-item"><strong>3. Quote Preparation (24-48 hours):</strong> Detailed quote with pricing and timeline</div>
        <div class="timeline-item"><strong>4. Delivery:</strong> You receive your comprehensive quote via email</div>
      </div>
      <p>We appreciate your interest in ClearSpan Glass and look forward to working with you on your glass project!</p>
      <p>Best regards,<br>
      <strong>The ClearSpan Glass Sales Team</strong></p>
      <p style="text-align: center; margin-top: 30px;">
        <a href="{site_url}">Visit Our Website</a>
      </p>
    </div>
  </div>
</body>
</html>"#,
        first_name = encode_text(first_name),
        quote_id = encode_text(quote_id),
        site_url = encode_text(site_url),
    );

    (text, html)
}
