//! Prediction form state.
//!
//! Thirteen text buffers, one per clinical parameter, edited a character at
//! a time. Buffers are wiped when the form is submitted or dropped.

use zeroize::Zeroize;

use crate::domain::PatientParameters;

/// Form field definition
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub min: f64,
    pub max: f64,
    /// Whether only whole numbers are accepted
    pub integer: bool,
}

impl FormField {
    const fn whole(label: &'static str, hint: &'static str, min: f64, max: f64) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
            min,
            max,
            integer: true,
        }
    }

    fn parse(&self) -> Result<f64, String> {
        let value: f64 = self
            .value
            .trim()
            .parse()
            .map_err(|_| format!("{}: Invalid number", self.label))?;

        if !value.is_finite() || value < self.min || value > self.max {
            return Err(format!(
                "{}: Value must be between {} and {}",
                self.label, self.min, self.max
            ));
        }
        if self.integer && value.fract() != 0.0 {
            return Err(format!("{}: Must be a whole number", self.label));
        }
        Ok(value)
    }

    fn parse_int(&self) -> Result<i32, String> {
        // Range-checked whole number, so the cast is exact.
        self.parse().map(|v| v as i32)
    }
}

impl Drop for FormField {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Prediction form state
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::whole("Age", "years (1-120)", 1.0, 120.0),
                FormField::whole("Sex", "0=female, 1=male", 0.0, 1.0),
                FormField::whole(
                    "Chest Pain Type",
                    "0=typical, 1=atypical, 2=non-anginal, 3=asymptomatic",
                    0.0,
                    3.0,
                ),
                FormField::whole("Resting BP", "mmHg (50-250)", 50.0, 250.0),
                FormField::whole("Cholesterol", "mg/dl (50-700)", 50.0, 700.0),
                FormField::whole("Fasting Blood Sugar", "1 if > 120 mg/dl, else 0", 0.0, 1.0),
                FormField::whole(
                    "Resting ECG",
                    "0=normal, 1=ST-T abnormality, 2=LV hypertrophy",
                    0.0,
                    2.0,
                ),
                FormField::whole("Max Heart Rate", "bpm (40-250)", 40.0, 250.0),
                FormField::whole("Exercise Angina", "0=no, 1=yes", 0.0, 1.0),
                FormField {
                    label: "ST Depression",
                    hint: "oldpeak (0-10)",
                    value: String::new(),
                    min: 0.0,
                    max: 10.0,
                    integer: false,
                },
                FormField::whole("ST Slope", "0=down, 1=flat, 2=up", 0.0, 2.0),
                FormField::whole("Major Vessels", "colored by fluoroscopy (0-4)", 0.0, 4.0),
                FormField::whole(
                    "Thalassemia",
                    "1=fixed, 2=normal, 3=reversible",
                    1.0,
                    3.0,
                ),
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl PredictionForm {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Jump to a field by index; out-of-range indices are ignored.
    pub fn select_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.selected_field = index;
        }
    }

    /// Add a character to the current field
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.fields[self.selected_field].value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.zeroize();
    }

    /// Wipe all field buffers from memory and clear values.
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.zeroize();
        }
        self.error_message = None;
        self.selected_field = 0;
    }

    /// Validate and convert to `PatientParameters`.
    ///
    /// # Errors
    /// Returns the first field that fails to parse or is out of range.
    pub fn to_parameters(&self) -> Result<PatientParameters, String> {
        let f = &self.fields;
        let params = PatientParameters {
            age: f[0].parse_int()?,
            sex: f[1].parse_int()?,
            chest_pain_type: f[2].parse_int()?,
            resting_blood_pressure: f[3].parse_int()?,
            cholesterol: f[4].parse_int()?,
            fasting_blood_sugar_high: f[5].parse_int()?,
            resting_ecg: f[6].parse_int()?,
            max_heart_rate: f[7].parse_int()?,
            exercise_induced_angina: f[8].parse_int()?,
            st_depression: f[9].parse()?,
            st_slope: f[10].parse_int()?,
            major_vessels_colored: f[11].parse_int()?,
            thalassemia_status: f[12].parse_int()?,
        };
        params.validate().map_err(|errors| errors.join("; "))?;
        Ok(params)
    }

    /// Load sample data (58-year-old male, atypical angina)
    pub fn load_sample_data(&mut self) {
        let sample = [
            "58",  // age
            "1",   // sex (male)
            "1",   // chest pain (atypical angina)
            "130", // resting bp
            "210", // cholesterol
            "0",   // fasting blood sugar
            "0",   // resting ecg
            "130", // max heart rate
            "0",   // exercise angina
            "1.5", // st depression
            "1",   // st slope (flat)
            "0",   // major vessels
            "1",   // thalassemia (fixed defect)
        ];
        for (field, val) in self.fields.iter_mut().zip(sample) {
            field.value.zeroize();
            field.value.push_str(val);
        }
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_parameters;

    #[test]
    fn test_field_count_matches_parameters() {
        assert_eq!(
            PredictionForm::default().fields.len(),
            crate::domain::PARAMETER_NAMES.len()
        );
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = PredictionForm::default();
        form.prev_field();
        assert_eq!(form.selected_field, 12);
        form.next_field();
        assert_eq!(form.selected_field, 0);
        form.select_field(99);
        assert_eq!(form.selected_field, 0);
    }

    #[test]
    fn test_input_filters_characters() {
        let mut form = PredictionForm::default();
        for c in "5a8 x".chars() {
            form.input_char(c);
        }
        assert_eq!(form.fields[0].value, "58");
        form.delete_char();
        assert_eq!(form.fields[0].value, "5");
        form.clear_field();
        assert!(form.fields[0].value.is_empty());
    }

    #[test]
    fn test_sample_data_parses() {
        let mut form = PredictionForm::default();
        form.load_sample_data();
        let params = form.to_parameters().expect("Sample should parse");
        assert_eq!(params, sample_parameters());
    }

    #[test]
    fn test_empty_form_reports_first_field() {
        let form = PredictionForm::default();
        assert_eq!(form.to_parameters(), Err("Age: Invalid number".to_string()));
    }

    #[test]
    fn test_out_of_range_and_fractional_values() {
        let mut form = PredictionForm::default();
        form.load_sample_data();
        form.fields[3].value = "300".to_string();
        assert_eq!(
            form.to_parameters(),
            Err("Resting BP: Value must be between 50 and 250".to_string())
        );

        form.fields[3].value = "130.5".to_string();
        assert_eq!(
            form.to_parameters(),
            Err("Resting BP: Must be a whole number".to_string())
        );
    }

    #[test]
    fn test_clear_sensitive_wipes_buffers() {
        let mut form = PredictionForm::default();
        form.load_sample_data();
        form.selected_field = 4;
        form.clear_sensitive();
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(form.selected_field, 0);
    }
}
