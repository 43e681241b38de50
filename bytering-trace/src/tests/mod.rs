mod observation;
